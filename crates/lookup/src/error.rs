use thiserror::Error;

/// Errors raised while building a gateway.
///
/// Lookups themselves never fail with an error: a missing word, an upstream
/// outage and a payload we cannot read all come back as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Configuration is inconsistent (bad URL, zero timeout).
    #[error("invalid lookup config: {0}")]
    InvalidConfig(String),
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    Client(String),
}
