//! Lugat entry store.
//!
//! The glossary is loaded once, completely, before any search runs, and is
//! never mutated afterwards. Callers share it behind an `Arc`; there is no
//! locking because there is nothing to lock.
//!
//! ## Source format
//!
//! A JSON array of objects, each mapping one or more old terms to a modern
//! term. Either side may bundle synonyms with commas:
//!
//! ```json
//! [
//!   {"tekemmül": "olgunlaşma"},
//!   {"ecel, mevt": "ölüm"}
//! ]
//! ```
//!
//! ## Example
//!
//! ```
//! use store::{load, StaticSource};
//!
//! let source = StaticSource::new("inline", r#"[{"peyk": "uydu"}]"#);
//! let store = load(&source).unwrap();
//! assert_eq!(store.entry_count(), 1);
//! assert_eq!(store.get("peyk").unwrap().new_term, "uydu");
//! ```
use std::time::Instant;

use tracing::{info, warn, Level};

mod error;
mod source;
mod store;
mod types;

pub use crate::error::LoadError;
pub use crate::source::{EntrySource, FileSource, StaticSource};
pub use crate::store::EntryStore;
pub use crate::types::{Entry, Record};

/// Read and validate the whole payload from `source`.
pub fn load<S: EntrySource + ?Sized>(source: &S) -> Result<EntryStore, LoadError> {
    let start = Instant::now();
    let described = source.describe();
    let span = tracing::span!(Level::INFO, "store.load", source = %described);
    let _guard = span.enter();

    match source.fetch().and_then(|payload| EntryStore::from_json_str(&payload)) {
        Ok(store) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                records = store.record_count(),
                entries = store.entry_count(),
                elapsed_micros,
                "store_load_success"
            );
            Ok(store)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "store_load_failure");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"tekemmül": "olgunlaşma"}}, {{"techir": "erteleme"}}]"#
        )
        .expect("write");

        let store = load(&FileSource::new(file.path())).expect("load");
        assert_eq!(store.record_count(), 2);
        assert_eq!(store.records()[1], Record::single("techir", "erteleme"));
    }

    #[test]
    fn load_reports_unreachable_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load(&FileSource::new(dir.path().join("data.json"))).unwrap_err();
        assert!(matches!(err, LoadError::Unreachable(_)));
    }

    #[test]
    fn load_reports_empty_payload() {
        let err = load(&StaticSource::new("empty", "[]")).unwrap_err();
        assert_eq!(err, LoadError::Empty);
    }

    #[test]
    fn load_through_trait_object() {
        let source: Box<dyn EntrySource> = Box::new(StaticSource::new("boxed", r#"[{"a": "b"}]"#));
        let store = load(source.as_ref()).expect("load");
        assert_eq!(store.entry_count(), 1);
    }
}
