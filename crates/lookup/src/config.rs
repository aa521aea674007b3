use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Default TDK endpoint queried by [`TdkGateway`](crate::TdkGateway).
pub const DEFAULT_BASE_URL: &str = "https://sozluk.gov.tr/gts_id";

/// Connection settings for the external dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// Endpoint receiving `?id=<term>`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

impl LookupConfig {
    /// Point the config at another endpoint, e.g. a local fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate and return the parsed base URL.
    pub fn validate(&self) -> Result<Url, LookupError> {
        if self.base_url.trim().is_empty() {
            return Err(LookupError::InvalidConfig("base_url must not be empty".into()));
        }
        let url = Url::parse(&self.base_url).map_err(|e| {
            LookupError::InvalidConfig(format!("base_url {:?} is not a URL: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LookupError::InvalidConfig(format!(
                "base_url scheme must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(LookupError::InvalidConfig("timeout_secs must be > 0".into()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(LookupError::InvalidConfig(
                "connect_timeout_secs must be > 0".into(),
            ));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_tdk() {
        let cfg = LookupConfig::default();
        let url = cfg.validate().expect("default config valid");
        assert_eq!(url.host_str(), Some("sozluk.gov.tr"));
        assert_eq!(url.path(), "/gts_id");
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        for base in ["", "   ", "not a url", "ftp://example.com/gts_id"] {
            let cfg = LookupConfig::default().with_base_url(base);
            assert!(
                matches!(cfg.validate(), Err(LookupError::InvalidConfig(_))),
                "{base:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_timeouts() {
        let cfg = LookupConfig::default().with_timeout_secs(0);
        assert!(cfg.validate().is_err());

        let cfg = LookupConfig {
            connect_timeout_secs: 0,
            ..LookupConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: LookupConfig =
            serde_json::from_str(r#"{"timeout_secs": 3}"#).expect("parse");
        assert_eq!(cfg.timeout_secs, 3);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
