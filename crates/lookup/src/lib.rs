//! # Lugat Lookup (`lookup`)
//!
//! Escalation path for words the local glossary does not know. A
//! [`LookupGateway`] takes a plain-text term and returns a
//! [`DefinitionResult`] or nothing; it never returns an error to the caller.
//!
//! - [`TdkGateway`] queries the TDK Güncel Türkçe Sözlük (`gts_id?id=<term>`)
//!   over HTTPS with `reqwest`, strips inline HTML from meanings and collects
//!   usage examples.
//! - [`StaticGateway`] answers from an in-memory map.
//! - [`format_definition`] renders a result as labelled text:
//!
//! ```text
//! Anlamları | m1, m2
//!
//! Telaffuz | p
//!
//! Örnek | e1; e2
//! ```
//!
//! Failures are logged (`lookup_failure`, `lookup_not_found`) through
//! `tracing` and collapse to `None`.

mod config;
mod error;
mod gateway;
mod parse;
mod types;

pub use crate::config::{LookupConfig, DEFAULT_BASE_URL};
pub use crate::error::LookupError;
pub use crate::gateway::{LookupGateway, StaticGateway, TdkGateway};
pub use crate::parse::{parse_tdk_response, strip_html};
pub use crate::types::{format_definition, DefinitionResult};
