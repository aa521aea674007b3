//! # Lugat Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers a free-text query against a loaded glossary
//! ([`store::EntryStore`]). A record matches when the normalized query is a
//! substring of the normalized old term or new term of any of its fields,
//! either of the whole field or of one of its comma-separated synonyms.
//! Normalization comes from `canonical`, so "PEYK", "Peyk" and "peyk" all
//! find the same record, and "olum" finds "ölüm".
//!
//! ## Core Types
//!
//! - [`SearchOutcome`]: `NoActiveQuery` for a blank query, `Unavailable` when
//!   the glossary never loaded, and `Matches` (possibly empty) otherwise.
//! - [`MatchResult`]: matching records in store order, with
//!   [`MatchResult::rows`] for one display row per field.
//! - [`MatchConfig`]: normalization and synonym separator.
//! - [`Matcher`]: binds one glossary (or its load failure) to a config.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, SearchOutcome};
//! use store::EntryStore;
//!
//! let store = EntryStore::from_json_str(
//!     r#"[{"tekemmül": "olgunlaşma"}, {"techir": "erteleme"}]"#,
//! )
//! .expect("valid glossary");
//! let matcher = Matcher::new(store);
//!
//! match matcher.search("er") {
//!     SearchOutcome::Matches(result) => {
//!         let rows: Vec<_> = result.rows().collect();
//!         assert_eq!(rows, vec![("techir", "erteleme")]);
//!     }
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-search latency and hit counts. Every [`Matcher::search`] also
//! emits a `search_complete` debug event.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{entry_matches, search, Matcher};
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::types::{MatchConfig, MatchError, MatchResult, OutcomeKind, SearchOutcome};
