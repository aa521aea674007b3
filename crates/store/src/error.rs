//! Error type produced when the glossary cannot be loaded.
//!
//! A failed load is never fatal: the matcher keeps the [`LoadError`] and
//! answers every search with an "unavailable" outcome that carries it.
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`Unreachable`](LoadError::Unreachable) | The source could not be read |
//! | [`Malformed`](LoadError::Malformed) | Not an array of string-keyed records of strings |
//! | [`Empty`](LoadError::Empty) | The array holds no records |
use thiserror::Error;

/// Errors that can occur while loading an [`EntryStore`](crate::EntryStore).
///
/// Cloneable and comparable so a matcher can hand the same failure to every
/// caller that searches a store that never loaded.
///
/// ```rust
/// use store::LoadError;
///
/// let err = LoadError::Malformed("record 3 is not an object".into());
/// assert!(err.to_string().contains("record 3"));
/// assert_eq!(LoadError::Empty.to_string(), "entry payload contains no records");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The source could not be read at all.
    #[error("entry source unreachable: {0}")]
    Unreachable(String),

    /// The payload was read but is not a sequence of string-keyed records.
    #[error("malformed entry payload: {0}")]
    Malformed(String),

    /// The payload parsed as an empty sequence.
    #[error("entry payload contains no records")]
    Empty,
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}
