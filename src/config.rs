//! YAML configuration file support for Lugat.
//!
//! One file configures every stage: where the glossary comes from, how terms
//! are normalized, how synonyms are split, and which dictionary service the
//! lookup gateway talks to. Every section is optional; a missing section
//! takes its defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "local glossary"
//!
//! store:
//!   path: "data/data.json"
//!
//! canonical:
//!   version: 1
//!   compose_unicode: false
//!   lowercase: true
//!   fold_diacritics: true
//!
//! matcher:
//!   synonym_separator: ","
//!
//! lookup:
//!   enabled: true
//!   base_url: "https://sozluk.gov.tr/gts_id"
//!   timeout_secs: 10
//!   connect_timeout_secs: 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use canonical::NormalizeConfig;
use lookup::LookupConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the whole application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LugatConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub store: StoreYamlConfig,

    /// Normalization applied to queries and terms
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,

    #[serde(default)]
    pub lookup: LookupYamlConfig,
}

impl LugatConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LugatConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.store.validate()?;
        self.match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.lookup.validate()?;

        Ok(())
    }

    /// Normalizer settings as consumed by `canonical`.
    pub fn normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            version: self.canonical.version,
            compose_unicode: self.canonical.compose_unicode,
            lowercase: self.canonical.lowercase,
            fold_diacritics: self.canonical.fold_diacritics,
        }
    }

    /// Matcher settings as consumed by `matcher`.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            normalizer: self.normalize_config(),
            synonym_separator: self.matcher.synonym_separator,
        }
    }

    /// Gateway settings as consumed by `lookup`.
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            base_url: self.lookup.base_url.clone(),
            timeout_secs: self.lookup.timeout_secs,
            connect_timeout_secs: self.lookup.connect_timeout_secs,
        }
    }
}

impl Default for LugatConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            store: StoreYamlConfig::default(),
            canonical: CanonicalYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
            lookup: LookupYamlConfig::default(),
        }
    }
}

/// Glossary source. Without a path the bundled glossary is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreYamlConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "store.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Canonicalization stage YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub compose_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub fold_diacritics: bool,
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            compose_unicode: false,
            lowercase: true,
            fold_diacritics: true,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    #[serde(default = "default_synonym_separator")]
    pub synonym_separator: char,
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            synonym_separator: default_synonym_separator(),
        }
    }
}

/// Lookup gateway YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupYamlConfig {
    /// When false, no external dictionary is consulted.
    #[serde(default = "true_value")]
    pub enabled: bool,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl LookupYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.enabled {
            return Ok(());
        }
        LookupConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            connect_timeout_secs: self.connect_timeout_secs,
        }
        .validate()
        .map(|_| ())
        .map_err(|e| ConfigLoadError::Validation(format!("lookup: {e}")))
    }
}

impl Default for LookupYamlConfig {
    fn default() -> Self {
        let defaults = LookupConfig::default();
        Self {
            enabled: true,
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout_secs,
            connect_timeout_secs: defaults.connect_timeout_secs,
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_synonym_separator() -> char {
    canonical::SYNONYM_SEPARATOR
}
fn default_base_url() -> String {
    lookup::DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    LookupConfig::default().timeout_secs
}
fn default_connect_timeout() -> u64 {
    LookupConfig::default().connect_timeout_secs
}
