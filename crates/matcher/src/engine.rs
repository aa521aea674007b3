use std::sync::Arc;
use std::time::Instant;

use canonical::{split_synonyms_on, Normalizer};
use store::{Entry, EntryStore, LoadError, Record};
use tracing::debug;

use crate::metrics;
use crate::types::{MatchConfig, MatchError, MatchResult, SearchOutcome};

#[cfg(test)]
mod tests;

/// Search a loaded store with the default configuration.
///
/// Pure: the same query against the same store always yields the same
/// ordered result, and nothing is cached between calls.
pub fn search(query: &str, store: &EntryStore) -> SearchOutcome {
    search_records(query, store, &Normalizer::default(), canonical::SYNONYM_SEPARATOR)
}

/// True if `entry` contains the already-normalized `query` on either side.
///
/// A side matches when the whole normalized field contains the query, or
/// when any of its trimmed comma-separated synonyms does.
pub fn entry_matches(entry: &Entry, normalized_query: &str, normalizer: &Normalizer) -> bool {
    entry_matches_on(entry, normalized_query, normalizer, canonical::SYNONYM_SEPARATOR)
}

fn entry_matches_on(
    entry: &Entry,
    normalized_query: &str,
    normalizer: &Normalizer,
    separator: char,
) -> bool {
    field_matches(&normalizer.normalize(&entry.old_term), normalized_query, separator)
        || field_matches(&normalizer.normalize(&entry.new_term), normalized_query, separator)
}

fn field_matches(normalized_field: &str, normalized_query: &str, separator: char) -> bool {
    // The whole-field check only adds hits for queries that span a
    // separator, e.g. "ecel, m".
    normalized_field.contains(normalized_query)
        || split_synonyms_on(normalized_field, separator)
            .iter()
            .any(|synonym| synonym.contains(normalized_query))
}

fn record_matches(
    record: &Record,
    normalized_query: &str,
    normalizer: &Normalizer,
    separator: char,
) -> bool {
    record
        .entries()
        .iter()
        .any(|entry| entry_matches_on(entry, normalized_query, normalizer, separator))
}

fn search_records(
    query: &str,
    store: &EntryStore,
    normalizer: &Normalizer,
    separator: char,
) -> SearchOutcome {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchOutcome::NoActiveQuery;
    }

    let normalized_query = normalizer.normalize(trimmed);
    let records: Vec<Record> = store
        .records()
        .iter()
        .filter(|record| record_matches(record, &normalized_query, normalizer, separator))
        .cloned()
        .collect();

    SearchOutcome::Matches(MatchResult::new(records))
}

/// Matcher bound to one glossary, or to the failure that prevented loading it.
///
/// A matcher built from a failed load never panics and never pretends the
/// glossary is empty: every search returns [`SearchOutcome::Unavailable`].
#[derive(Debug, Clone)]
pub struct Matcher {
    store: Result<Arc<EntryStore>, LoadError>,
    normalizer: Normalizer,
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher over a loaded store with the default config.
    pub fn new(store: EntryStore) -> Self {
        Self::with_store_arc(Arc::new(store))
    }

    /// Construct a matcher over a shared store handle.
    pub fn with_store_arc(store: Arc<EntryStore>) -> Self {
        Self {
            store: Ok(store),
            normalizer: Normalizer::default(),
            cfg: MatchConfig::default(),
        }
    }

    /// Construct a matcher that reports `err` on every search.
    pub fn unavailable(err: LoadError) -> Self {
        Self {
            store: Err(err),
            normalizer: Normalizer::default(),
            cfg: MatchConfig::default(),
        }
    }

    /// Construct a matcher from the result of [`store::load`].
    pub fn from_load(result: Result<EntryStore, LoadError>) -> Self {
        match result {
            Ok(store) => Self::new(store),
            Err(err) => Self::unavailable(err),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        self.normalizer = Normalizer::new(cfg.normalizer.clone())?;
        self.cfg = cfg;
        Ok(self)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// The loaded store, or the reason it is missing.
    pub fn store(&self) -> Result<&EntryStore, &LoadError> {
        self.store.as_deref()
    }

    pub fn is_available(&self) -> bool {
        self.store.is_ok()
    }

    /// Normalize a string exactly as queries and terms are normalized.
    pub fn normalize(&self, input: &str) -> String {
        self.normalizer.normalize(input)
    }

    /// Run one search and return the ordered outcome.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let start = Instant::now();

        let outcome = match &self.store {
            Err(err) => SearchOutcome::Unavailable(err.clone()),
            Ok(store) => {
                search_records(query, store, &self.normalizer, self.cfg.synonym_separator)
            }
        };

        let latency = start.elapsed();
        let kind = outcome.kind();
        let hit_count = outcome.hit_count();
        debug!(
            outcome = kind.as_str(),
            query_len = query.len(),
            hit_count,
            elapsed_micros = latency.as_micros(),
            "search_complete"
        );

        metrics::report(kind, latency, hit_count);

        outcome
    }
}
