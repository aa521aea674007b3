//! Line-oriented interactive session over a [`Dictionary`].
//!
//! The binary feeds stdin lines to [`Session::handle_line`]; each line is a
//! query, `:tdk [term]` for an explicit lookup, or `:q` to quit. Lookup
//! failures are shown through the presenter and never end the session.

use crate::dictionary::{Dictionary, DictionaryError};
use crate::presenter::ResultPresenter;
use matcher::SearchOutcome;
use tracing::debug;

/// Shown after an empty result when a lookup gateway is configured.
pub const LOOKUP_HINT: &str = "TDK üzerinde aramak için :tdk yazın.";

/// Shown when `:tdk` is used without a configured gateway.
pub const LOOKUP_DISABLED_MESSAGE: &str = "TDK araması kapalı.";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    /// `:tdk` with an optional term; without one the last query is used.
    Lookup(Option<&'a str>),
    Search(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line == ":q" || line == ":quit" {
            return Command::Quit;
        }
        match line.strip_prefix(":tdk") {
            Some(rest) if rest.is_empty() => Command::Lookup(None),
            Some(rest) if rest.starts_with(char::is_whitespace) => {
                let term = rest.trim();
                Command::Lookup((!term.is_empty()).then_some(term))
            }
            _ => Command::Search(line),
        }
    }
}

/// Whether the caller should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State carried between lines: the dictionary and the last query typed.
#[derive(Debug)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    last_query: String,
}

impl<'d> Session<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            last_query: String::new(),
        }
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Handle one input line. Only presenter errors are returned.
    pub async fn handle_line<P>(&mut self, line: &str, presenter: &mut P) -> Result<Flow, P::Error>
    where
        P: ResultPresenter + ?Sized,
    {
        match Command::parse(line) {
            Command::Quit => return Ok(Flow::Quit),
            Command::Lookup(term) => {
                let term = term.unwrap_or(self.last_query.as_str()).to_string();
                self.define(&term, presenter).await?;
            }
            Command::Search(query) => {
                let outcome = self.search(query, false, presenter).await?;
                if outcome.offers_lookup() && self.dictionary.has_gateway() {
                    presenter.present_prompt(LOOKUP_HINT)?;
                }
                self.last_query = query.to_string();
            }
        }
        Ok(Flow::Continue)
    }

    /// Present the outcome of `query`, asking the gateway when `escalate`
    /// is set and nothing matched.
    pub async fn search<P>(
        &self,
        query: &str,
        escalate: bool,
        presenter: &mut P,
    ) -> Result<SearchOutcome, P::Error>
    where
        P: ResultPresenter + ?Sized,
    {
        let outcome = self.dictionary.search(query);
        presenter.present_outcome(query, &outcome)?;
        if escalate && outcome.offers_lookup() {
            let definition = self.dictionary.escalate(query, &outcome).await;
            presenter.present_definition(query.trim(), definition.as_ref())?;
        }
        Ok(outcome)
    }

    /// Explicit lookup of `term`. A blank term or a disabled gateway is
    /// reported as a prompt.
    pub async fn define<P>(&self, term: &str, presenter: &mut P) -> Result<(), P::Error>
    where
        P: ResultPresenter + ?Sized,
    {
        match self.dictionary.lookup(term).await {
            Ok(definition) => presenter.present_definition(term.trim(), definition.as_ref()),
            Err(DictionaryError::LookupDisabled) => {
                debug!("lookup_disabled");
                presenter.present_prompt(LOOKUP_DISABLED_MESSAGE)
            }
            Err(err) => presenter.present_prompt(&err.to_string()),
        }
    }
}
