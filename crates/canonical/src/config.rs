//! Configuration types for term normalization.
//!
//! [`NormalizeConfig`] controls how a query or glossary term is folded before
//! substring comparison. The default configuration is the one every search
//! uses; the knobs exist so callers can inspect a single stage in isolation.
//!
//! # Versioning
//!
//! Any change to folding behavior must bump `version`. Version 0 is reserved
//! and rejected by [`NormalizeConfig::validate`].
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.compose_unicode);
//! assert!(config.lowercase);
//! assert!(config.fold_diacritics);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalization pipeline.
///
/// Serializes as:
///
/// ```json
/// {
///   "version": 1,
///   "compose_unicode": false,
///   "lowercase": true,
///   "fold_diacritics": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the folding rules. Must be >= 1.
    pub version: u32,

    /// If true, compose the input to Unicode NFC before folding.
    ///
    /// Off by default. When on, decomposed input such as `"s\u{0327}"` is
    /// composed to `"ş"` and folds like the precomposed letter, but every
    /// other combining sequence is composed too (`"a\u{0307}"` becomes
    /// `"ȧ"`), which changes substring results for such terms.
    pub compose_unicode: bool,

    /// If true, apply Unicode lowercasing.
    ///
    /// `"İ"` lowercases to `"i\u{0307}"`; the combining dot is removed by the
    /// diacritic fold when that stage is enabled.
    pub lowercase: bool,

    /// If true, map the Turkish letters ğ, ü, ş, ö, ç (and the dotted capital
    /// İ) to their unaccented ASCII counterparts.
    pub fold_diacritics: bool,
}

impl NormalizeConfig {
    /// Reject configurations that cannot produce stable output.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            compose_unicode: false,
            lowercase: true,
            fold_diacritics: true,
        }
    }
}
