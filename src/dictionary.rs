//! The glossary as one object: local search plus external escalation.

use std::fmt;
use std::sync::Arc;

use lookup::{DefinitionResult, LookupError, LookupGateway, TdkGateway};
use matcher::{MatchError, Matcher, SearchOutcome};
use store::{Entry, EntrySource, FileSource, LoadError, StaticSource};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigLoadError, LugatConfig};

/// Glossary compiled into the binary, used when no path is configured.
pub const BUNDLED_GLOSSARY: &str = include_str!("../data/data.json");

/// Prompt returned instead of performing an explicit lookup of nothing.
pub const EMPTY_LOOKUP_PROMPT: &str = "Öncelikle bir kelime yazınız.";

/// Errors from building a [`Dictionary`] or requesting an explicit lookup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// An explicit lookup was requested with a blank term.
    #[error("{}", EMPTY_LOOKUP_PROMPT)]
    EmptyTerm,
    #[error("external lookup is disabled")]
    LookupDisabled,
    #[error("config error: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("matcher error: {0}")]
    Match(#[from] MatchError),
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Local glossary search with an optional external dictionary behind it.
///
/// A dictionary whose glossary failed to load is still usable: searches
/// report the load failure and explicit lookups still reach the gateway.
#[derive(Clone)]
pub struct Dictionary {
    matcher: Matcher,
    gateway: Option<Arc<dyn LookupGateway>>,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("matcher", &self.matcher)
            .field("gateway", &self.gateway.is_some())
            .finish()
    }
}

impl Dictionary {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            gateway: None,
        }
    }

    /// The bundled glossary with default settings and no gateway.
    pub fn bundled() -> Self {
        let source = StaticSource::new("bundled", BUNDLED_GLOSSARY);
        Self::new(Matcher::from_load(store::load(&source)))
    }

    /// Build everything a config describes: glossary, matcher and gateway.
    ///
    /// A glossary that cannot be loaded is not an error here; it surfaces as
    /// [`SearchOutcome::Unavailable`] from every search.
    pub fn from_config(cfg: &LugatConfig) -> Result<Self, DictionaryError> {
        cfg.validate()?;

        let loaded = match &cfg.store.path {
            Some(path) => store::load(&FileSource::new(path)),
            None => store::load(&StaticSource::new("bundled", BUNDLED_GLOSSARY)),
        };
        let matcher = Matcher::from_load(loaded).with_config(cfg.match_config())?;

        let dictionary = Self::new(matcher);
        if cfg.lookup.enabled {
            let gateway = TdkGateway::new(&cfg.lookup_config())?;
            Ok(dictionary.with_gateway(Arc::new(gateway)))
        } else {
            Ok(dictionary)
        }
    }

    /// Load a glossary from any source with default settings.
    pub fn from_source<S: EntrySource + ?Sized>(source: &S) -> Self {
        Self::new(Matcher::from_load(store::load(source)))
    }

    pub fn with_gateway(mut self, gateway: Arc<dyn LookupGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn has_gateway(&self) -> bool {
        self.gateway.is_some()
    }

    /// The glossary load failure, if any.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.matcher.store().err()
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        self.matcher.search(query)
    }

    /// Ask the external dictionary about `query` after a search found nothing.
    ///
    /// Only a search that ran and matched nothing escalates; a blank query,
    /// an unavailable glossary or a non-empty result returns `None` without
    /// contacting the gateway.
    pub async fn escalate(&self, query: &str, outcome: &SearchOutcome) -> Option<DefinitionResult> {
        if !outcome.offers_lookup() {
            return None;
        }
        let gateway = self.gateway.as_ref()?;
        debug!(query_len = query.len(), "lookup_escalation");
        gateway.lookup_external(query.trim()).await
    }

    /// Explicit lookup of `term`, whether or not the glossary matched it.
    ///
    /// `Ok(None)` means the dictionary has no definition; a blank term is
    /// rejected with [`DictionaryError::EmptyTerm`] before any request.
    pub async fn lookup(&self, term: &str) -> Result<Option<DefinitionResult>, DictionaryError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DictionaryError::EmptyTerm);
        }
        let gateway = self.gateway.as_ref().ok_or(DictionaryError::LookupDisabled)?;
        let definition = gateway.lookup_external(term).await;
        info!(
            term_len = term.len(),
            found = definition.is_some(),
            "lookup_explicit"
        );
        Ok(definition)
    }

    /// Look up the modern term of a selected result row.
    pub async fn lookup_new_term(
        &self,
        entry: &Entry,
    ) -> Result<Option<DefinitionResult>, DictionaryError> {
        self.lookup(&entry.new_term).await
    }
}
