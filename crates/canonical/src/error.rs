use thiserror::Error;

/// Errors that can occur when normalizing with an explicit configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
