//! Glossary data model.
//!
//! ```text
//! EntryStore
//! └── records: Vec<Record>          # source order
//!     └── entries: Vec<Entry>       # field order of the source object
//!         ├── old_term: String      # may bundle "a, b"
//!         └── new_term: String      # may bundle "c, d"
//! ```
//!
//! A record is one element of the source array. Almost every record holds a
//! single entry; records with several fields keep them together because they
//! are matched and displayed as a unit.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One old-term → new-term pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub old_term: String,
    pub new_term: String,
}

impl Entry {
    pub fn new(old_term: impl Into<String>, new_term: impl Into<String>) -> Self {
        Self {
            old_term: old_term.into(),
            new_term: new_term.into(),
        }
    }

    /// Borrow the entry as an `(old_term, new_term)` tuple.
    pub fn as_pair(&self) -> (&str, &str) {
        (self.old_term.as_str(), self.new_term.as_str())
    }
}

/// An ordered, non-empty group of entries read from one source object.
///
/// Serializes back to the source shape, a JSON object of old → new terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    entries: Vec<Entry>,
}

impl Record {
    /// Build a record from entries in field order. Returns `None` when
    /// `entries` is empty.
    pub fn new(entries: Vec<Entry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Convenience constructor for the common single-entry record.
    pub fn single(old_term: impl Into<String>, new_term: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::new(old_term, new_term)],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn retain_entries(&mut self, keep: impl FnMut(&Entry) -> bool) {
        self.entries.retain(keep);
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.old_term, &entry.new_term)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_is_rejected() {
        assert!(Record::new(Vec::new()).is_none());
    }

    #[test]
    fn record_serializes_as_source_object() {
        let record = Record::new(vec![
            Entry::new("ecel, mevt", "ölüm"),
            Entry::new("techir", "erteleme"),
        ])
        .expect("non-empty");
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"ecel, mevt":"ölüm","techir":"erteleme"}"#);
    }

    #[test]
    fn pair_view_borrows_both_sides() {
        let entry = Entry::new("peyk", "uydu");
        assert_eq!(entry.as_pair(), ("peyk", "uydu"));
    }
}
