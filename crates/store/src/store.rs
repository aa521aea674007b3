use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::error::LoadError;
use crate::types::{Entry, Record};

/// Immutable glossary: records in source order plus an old-term index.
///
/// Construction always goes through validation, so an `EntryStore` value is
/// never empty and its old terms are unique.
#[derive(Debug, Clone)]
pub struct EntryStore {
    records: Vec<Record>,
    // old_term -> (record index, entry index)
    by_old_term: HashMap<String, (usize, usize)>,
    entry_count: usize,
}

impl EntryStore {
    /// Parse a JSON payload of the form `[{"old": "new"}, ...]`.
    pub fn from_json_str(payload: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(payload)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(LoadError::Malformed(format!(
                    "expected an array of records, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            records.push(parse_record(idx, item)?);
        }
        Self::from_records(records)
    }

    /// Build a store from already-parsed records.
    ///
    /// Later duplicates of an old term are dropped (the first occurrence
    /// wins); a record left with no entries is dropped with it.
    pub fn from_records(records: Vec<Record>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut by_old_term = HashMap::new();
        let mut kept = Vec::with_capacity(records.len());
        for (source_idx, mut record) in records.into_iter().enumerate() {
            let record_idx = kept.len();
            let mut entry_idx = 0usize;
            record.retain_entries(|entry| {
                if by_old_term.contains_key(&entry.old_term) {
                    warn!(
                        old_term = %entry.old_term,
                        record_index = source_idx,
                        "store_duplicate_term"
                    );
                    return false;
                }
                by_old_term.insert(entry.old_term.clone(), (record_idx, entry_idx));
                entry_idx += 1;
                true
            });
            if !record.is_empty() {
                kept.push(record);
            }
        }

        let entry_count = kept.iter().map(Record::len).sum();
        Ok(Self {
            records: kept,
            by_old_term,
            entry_count,
        })
    }

    /// Records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Every entry in source order, records flattened in field order.
    pub fn all_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.records.iter().flat_map(|record| record.entries().iter())
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Exact lookup by the old term as written in the source.
    pub fn get(&self, old_term: &str) -> Option<&Entry> {
        self.by_old_term
            .get(old_term)
            .map(|&(record, entry)| &self.records[record].entries()[entry])
    }

    /// Reverse lookup: every entry whose new term is exactly `new_term`.
    pub fn entries_with_new_term<'a>(
        &'a self,
        new_term: &'a str,
    ) -> impl Iterator<Item = &'a Entry> + 'a {
        self.all_entries()
            .filter(move |entry| entry.new_term == new_term)
    }
}

fn parse_record(idx: usize, item: Value) -> Result<Record, LoadError> {
    let fields = match item {
        Value::Object(fields) => fields,
        other => {
            return Err(LoadError::Malformed(format!(
                "record {idx} is {}, expected an object",
                json_kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(fields.len());
    for (old_term, value) in fields {
        match value {
            Value::String(new_term) => entries.push(Entry { old_term, new_term }),
            other => {
                return Err(LoadError::Malformed(format!(
                    "record {idx} field {old_term:?} is {}, expected a string",
                    json_kind(&other)
                )))
            }
        }
    }

    Record::new(entries)
        .ok_or_else(|| LoadError::Malformed(format!("record {idx} has no terms")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
