//! Lugat canonical text layer.
//!
//! Every glossary term and every query passes through [`normalize`] before
//! comparison, so matching is insensitive to case and to the six Turkish
//! diacritics.
//!
//! ## What we do
//!
//! - Unicode NFC composition (opt-in, off by default)
//! - Unicode lowercasing
//! - Folding of ğ, ü, ş, ö, ç and the dotted İ to ASCII, every occurrence
//! - Splitting of comma-bundled synonym fields
//!
//! ## Pure function guarantee
//!
//! No I/O, no locale dependence. Same text + same config gives the same
//! output on any machine, which is what lets the matcher normalize the query
//! and the terms independently and still compare them.

mod config;
mod error;
mod pipeline;
mod synonym;

pub use crate::config::NormalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{normalize, normalize_with, Normalizer};
pub use crate::synonym::{split_synonyms, split_synonyms_on, SYNONYM_SEPARATOR};
