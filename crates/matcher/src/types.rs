use canonical::{CanonicalError, NormalizeConfig, SYNONYM_SEPARATOR};
use serde::{Deserialize, Serialize};
use store::{LoadError, Record};
use thiserror::Error;

/// Configuration for a [`Matcher`](crate::Matcher).
///
/// Cheap to clone and serde-friendly so it can be embedded in the
/// application's YAML config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Normalization applied to the query and to every term.
    #[serde(default)]
    pub normalizer: NormalizeConfig,
    /// Separator between bundled synonyms inside one field.
    #[serde(default = "MatchConfig::default_synonym_separator")]
    pub synonym_separator: char,
}

impl MatchConfig {
    pub(crate) fn default_synonym_separator() -> char {
        SYNONYM_SEPARATOR
    }

    /// Validate the configuration before a matcher is built from it.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.normalizer.validate()?;
        if self.synonym_separator.is_whitespace() || self.synonym_separator.is_alphanumeric() {
            return Err(MatchError::InvalidConfig(format!(
                "synonym_separator must be punctuation, got {:?}",
                self.synonym_separator
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizeConfig::default(),
            synonym_separator: Self::default_synonym_separator(),
        }
    }
}

/// Ordered records that matched a query, in store order.
///
/// Records are returned whole rather than exploded into rows so a presenter
/// can lay out one row per field deterministically; see [`MatchResult::rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    records: Vec<Record>,
}

impl MatchResult {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display rows: one `(old_term, new_term)` pair per field, records in
    /// store order and fields in source order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.records
            .iter()
            .flat_map(|record| record.entries().iter().map(|entry| entry.as_pair()))
    }
}

/// Outcome of one search call.
///
/// The three variants are deliberately distinct: "nothing typed", "cannot
/// search" and "searched" (possibly with zero matches) each drive a
/// different state in the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty or whitespace only.
    NoActiveQuery,
    /// The store never loaded; carries the load failure.
    Unavailable(LoadError),
    /// The search ran. The result may be empty.
    Matches(MatchResult),
}

impl SearchOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SearchOutcome::NoActiveQuery => OutcomeKind::NoActiveQuery,
            SearchOutcome::Unavailable(_) => OutcomeKind::Unavailable,
            SearchOutcome::Matches(result) if result.is_empty() => OutcomeKind::NoMatches,
            SearchOutcome::Matches(_) => OutcomeKind::Matched,
        }
    }

    /// The match result, if the search ran.
    pub fn matches(&self) -> Option<&MatchResult> {
        match self {
            SearchOutcome::Matches(result) => Some(result),
            _ => None,
        }
    }

    /// Number of matching records; zero for the sentinel outcomes.
    pub fn hit_count(&self) -> usize {
        self.matches().map_or(0, MatchResult::len)
    }

    /// True when the search ran and found nothing, the state in which a
    /// caller may offer an external lookup.
    pub fn offers_lookup(&self) -> bool {
        self.kind() == OutcomeKind::NoMatches
    }
}

/// Coarse classification of a [`SearchOutcome`] for metrics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    NoActiveQuery,
    Unavailable,
    NoMatches,
    Matched,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::NoActiveQuery => "no_active_query",
            OutcomeKind::Unavailable => "unavailable",
            OutcomeKind::NoMatches => "no_matches",
            OutcomeKind::Matched => "matched",
        }
    }
}

/// Errors produced while building a matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Invalid normalization configuration.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Entry;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.synonym_separator, ',');
    }

    #[test]
    fn whitespace_separator_rejected() {
        let cfg = MatchConfig {
            synonym_separator: ' ',
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("synonym_separator")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_normalizer_rejected() {
        let cfg = MatchConfig {
            normalizer: NormalizeConfig {
                version: 0,
                ..NormalizeConfig::default()
            },
            ..MatchConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::Canonical(_))));
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg: MatchConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, MatchConfig::default());
    }

    #[test]
    fn rows_follow_record_then_field_order() {
        let result = MatchResult::new(vec![
            Record::new(vec![Entry::new("zail", "geçici"), Entry::new("avdet", "dönüş")])
                .expect("non-empty"),
            Record::single("techir", "erteleme"),
        ]);
        let rows: Vec<(&str, &str)> = result.rows().collect();
        assert_eq!(
            rows,
            vec![("zail", "geçici"), ("avdet", "dönüş"), ("techir", "erteleme")]
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn outcome_kinds_are_distinct() {
        assert_eq!(SearchOutcome::NoActiveQuery.kind(), OutcomeKind::NoActiveQuery);
        assert_eq!(
            SearchOutcome::Unavailable(LoadError::Empty).kind(),
            OutcomeKind::Unavailable
        );
        let empty = SearchOutcome::Matches(MatchResult::default());
        assert_eq!(empty.kind(), OutcomeKind::NoMatches);
        assert!(empty.offers_lookup());
        assert!(!SearchOutcome::NoActiveQuery.offers_lookup());
        assert!(!SearchOutcome::Unavailable(LoadError::Empty).offers_lookup());
    }

    #[test]
    fn match_result_serializes_as_source_records() {
        let result = MatchResult::new(vec![Record::single("peyk", "uydu")]);
        let json = serde_json::to_string(&result).expect("serialize");
        assert_eq!(json, r#"[{"peyk":"uydu"}]"#);
    }
}
