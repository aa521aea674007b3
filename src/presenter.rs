//! Rendering of search outcomes and definitions.
//!
//! The core never draws anything. A [`ResultPresenter`] receives ordered
//! results and definitions and decides how they look; the crate ships a
//! plain-text presenter for terminals and a JSON-lines presenter for scripts.

use std::io::{self, Write};

use lookup::{DefinitionResult, format_definition};
use matcher::{MatchResult, SearchOutcome};
use serde_json::json;
use store::LoadError;

/// Shown when a search ran and nothing matched.
pub const NO_MATCHES_MESSAGE: &str = "için bir sonuç bulunamadı";
/// Shown while no query is active.
pub const NO_QUERY_MESSAGE: &str = "Eski kelimelerin modern karşılıklarını keşfetmek için bir kelime yazın";
/// Shown when the glossary could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Veriler yüklenirken bir hata oluştu";
/// Shown when the external dictionary has no definition.
pub const NO_DEFINITION_MESSAGE: &str = "TDK üzerinde sonuç bulunamadı";

/// Consumer of search outcomes and definitions.
pub trait ResultPresenter {
    type Error;

    /// Matching records for a non-empty query; `result` may be empty.
    fn present_matches(&mut self, query: &str, result: &MatchResult) -> Result<(), Self::Error>;

    fn present_no_query(&mut self) -> Result<(), Self::Error>;

    fn present_unavailable(&mut self, err: &LoadError) -> Result<(), Self::Error>;

    /// Definition of `term` from the external dictionary, or `None` if it
    /// has none.
    fn present_definition(
        &mut self,
        term: &str,
        definition: Option<&DefinitionResult>,
    ) -> Result<(), Self::Error>;

    /// A short message asking the user to act, e.g. to type a word first.
    fn present_prompt(&mut self, message: &str) -> Result<(), Self::Error>;

    /// Dispatch a [`SearchOutcome`] to the matching method.
    fn present_outcome(&mut self, query: &str, outcome: &SearchOutcome) -> Result<(), Self::Error> {
        match outcome {
            SearchOutcome::NoActiveQuery => self.present_no_query(),
            SearchOutcome::Unavailable(err) => self.present_unavailable(err),
            SearchOutcome::Matches(result) => self.present_matches(query.trim(), result),
        }
    }
}

/// Aligned two-column text, one row per glossary field.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for TextPresenter<W> {
    type Error = io::Error;

    fn present_matches(&mut self, query: &str, result: &MatchResult) -> io::Result<()> {
        if result.is_empty() {
            return writeln!(self.out, "\"{query}\" {NO_MATCHES_MESSAGE}");
        }

        let width = result
            .rows()
            .map(|(old, _)| old.chars().count())
            .max()
            .unwrap_or(0);
        for (old, new) in result.rows() {
            writeln!(self.out, "{old:<width$}  →  {new}")?;
        }
        Ok(())
    }

    fn present_no_query(&mut self) -> io::Result<()> {
        writeln!(self.out, "{NO_QUERY_MESSAGE}")
    }

    fn present_unavailable(&mut self, err: &LoadError) -> io::Result<()> {
        writeln!(self.out, "{UNAVAILABLE_MESSAGE}: {err}")
    }

    fn present_definition(
        &mut self,
        term: &str,
        definition: Option<&DefinitionResult>,
    ) -> io::Result<()> {
        match definition {
            Some(def) => writeln!(self.out, "{}", format_definition(def)),
            None => writeln!(self.out, "\"{term}\": {NO_DEFINITION_MESSAGE}"),
        }
    }

    fn present_prompt(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }
}

/// One JSON object per line, for scripts and pipelines.
#[derive(Debug)]
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: serde_json::Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    type Error = io::Error;

    fn present_matches(&mut self, query: &str, result: &MatchResult) -> io::Result<()> {
        let rows: Vec<_> = result
            .rows()
            .map(|(old, new)| json!({ "old_term": old, "new_term": new }))
            .collect();
        let outcome = if result.is_empty() { "no_matches" } else { "matched" };
        self.emit(json!({ "query": query, "outcome": outcome, "results": rows }))
    }

    fn present_no_query(&mut self) -> io::Result<()> {
        self.emit(json!({ "outcome": "no_active_query" }))
    }

    fn present_unavailable(&mut self, err: &LoadError) -> io::Result<()> {
        self.emit(json!({ "outcome": "unavailable", "error": err.to_string() }))
    }

    fn present_definition(
        &mut self,
        term: &str,
        definition: Option<&DefinitionResult>,
    ) -> io::Result<()> {
        self.emit(json!({
            "term": term,
            "definition": definition,
            "formatted": definition.map(format_definition),
        }))
    }

    fn present_prompt(&mut self, message: &str) -> io::Result<()> {
        self.emit(json!({ "prompt": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::EntryStore;

    fn outcome(query: &str) -> SearchOutcome {
        let store = EntryStore::from_json_str(
            r#"[{"tekemmül": "olgunlaşma"}, {"techir": "erteleme"}, {"ecel, mevt": "ölüm"}]"#,
        )
        .expect("valid glossary");
        matcher::search(query, &store)
    }

    fn text(f: impl FnOnce(&mut TextPresenter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut presenter = TextPresenter::new(Vec::new());
        f(&mut presenter).expect("write to vec");
        String::from_utf8(presenter.into_inner()).expect("utf8")
    }

    #[test]
    fn text_rows_are_aligned() {
        let out = text(|p| p.present_outcome("e", &outcome("e")));
        assert_eq!(
            out,
            "tekemmül    →  olgunlaşma\ntechir      →  erteleme\necel, mevt  →  ölüm\n"
        );
    }

    #[test]
    fn text_no_matches_quotes_query() {
        let out = text(|p| p.present_outcome("  xyz ", &outcome("xyz")));
        assert_eq!(out, format!("\"xyz\" {NO_MATCHES_MESSAGE}\n"));
    }

    #[test]
    fn text_sentinels() {
        assert_eq!(
            text(|p| p.present_outcome("", &outcome(""))),
            format!("{NO_QUERY_MESSAGE}\n")
        );
        let out = text(|p| p.present_outcome("x", &SearchOutcome::Unavailable(LoadError::Empty)));
        assert!(out.starts_with(UNAVAILABLE_MESSAGE));
    }

    #[test]
    fn text_definition_and_missing_definition() {
        let def = DefinitionResult {
            meanings: vec!["Olgunlaşma".into()],
            pronunciation: None,
            examples: vec![],
        };
        assert_eq!(
            text(|p| p.present_definition("tekemmül", Some(&def))),
            "Anlamları | Olgunlaşma\n"
        );
        assert_eq!(
            text(|p| p.present_definition("qq", None)),
            format!("\"qq\": {NO_DEFINITION_MESSAGE}\n")
        );
    }

    #[test]
    fn json_matches_line() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter
            .present_outcome("er", &outcome("er"))
            .expect("write to vec");
        let out = String::from_utf8(presenter.into_inner()).expect("utf8");
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json line");
        assert_eq!(value["outcome"], "matched");
        assert_eq!(value["query"], "er");
        assert_eq!(
            value["results"],
            json!([{ "old_term": "techir", "new_term": "erteleme" }])
        );
    }

    #[test]
    fn json_missing_definition_is_null() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present_definition("qq", None).expect("write to vec");
        let out = String::from_utf8(presenter.into_inner()).expect("utf8");
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json line");
        assert!(value["definition"].is_null());
        assert!(value["formatted"].is_null());
    }
}
