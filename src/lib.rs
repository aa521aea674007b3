//! Workspace umbrella crate for Lugat, an Ottoman Turkish to modern Turkish
//! glossary.
//!
//! The member crates do one job each:
//!
//! - `canonical` folds case and the Turkish diacritics so "PEYK", "Peyk" and
//!   "peyk" compare equal.
//! - `store` loads the glossary once from JSON and keeps it read-only.
//! - `matcher` filters the glossary by normalized substring, in store order.
//! - `lookup` asks the TDK dictionary about words the glossary lacks.
//!
//! This crate stitches them into a [`Dictionary`], loads [`LugatConfig`] from
//! YAML, and defines the [`ResultPresenter`] seam and the interactive
//! [`Session`] used by the `lugat` binary.
//!
//! ```
//! use lugat::{Dictionary, SearchOutcome};
//!
//! let dictionary = Dictionary::bundled();
//! match dictionary.search("techir") {
//!     SearchOutcome::Matches(result) => {
//!         let rows: Vec<_> = result.rows().collect();
//!         assert_eq!(rows, vec![("techir", "erteleme")]);
//!     }
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! ```

pub mod config;
pub mod dictionary;
pub mod presenter;
pub mod session;

pub use canonical::{
    CanonicalError, NormalizeConfig, Normalizer, SYNONYM_SEPARATOR, normalize,
    normalize_with, split_synonyms,
};
pub use lookup::{
    DefinitionResult, LookupConfig, LookupError, LookupGateway, StaticGateway, TdkGateway,
    format_definition,
};
pub use matcher::{
    MatchConfig, MatchError, MatchResult, Matcher, OutcomeKind, SearchMetrics, SearchOutcome,
    search, set_search_metrics,
};
pub use store::{Entry, EntrySource, EntryStore, FileSource, LoadError, Record, StaticSource, load};

pub use crate::config::{ConfigLoadError, LugatConfig};
pub use crate::dictionary::{BUNDLED_GLOSSARY, Dictionary, DictionaryError, EMPTY_LOOKUP_PROMPT};
pub use crate::presenter::{JsonPresenter, ResultPresenter, TextPresenter};
pub use crate::session::{Command, Flow, Session};
