use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, info, warn, Instrument, Level};

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::parse::parse_tdk_response;
use crate::types::DefinitionResult;

/// An external dictionary consulted for terms the glossary does not cover.
///
/// Implementations must not surface errors: a word the dictionary does not
/// know, a network failure and an unreadable answer all yield `None`.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    async fn lookup_external(&self, term: &str) -> Option<DefinitionResult>;
}

/// Gateway backed by the TDK Güncel Türkçe Sözlük `gts_id` endpoint.
#[derive(Debug, Clone)]
pub struct TdkGateway {
    client: Client,
    base_url: Url,
}

impl TdkGateway {
    /// Build a gateway from a validated config.
    pub fn new(cfg: &LookupConfig) -> Result<Self, LookupError> {
        let base_url = cfg.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// URL requested for `term`; the term is percent-encoded into `id`.
    pub fn request_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("id", term);
        url
    }

    async fn fetch(&self, url: Url) -> Result<Value, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error {status}"));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("Invalid JSON response: {e}"))
    }
}

#[async_trait]
impl LookupGateway for TdkGateway {
    async fn lookup_external(&self, term: &str) -> Option<DefinitionResult> {
        let term = term.trim();
        if term.is_empty() {
            debug!("lookup_skipped_empty_term");
            return None;
        }

        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "lookup.external", term_len = term.len());

        async {
            let value = match self.fetch(self.request_url(term)).await {
                Ok(value) => value,
                Err(error) => {
                    warn!(
                        error = %error,
                        elapsed_micros = start.elapsed().as_micros(),
                        "lookup_failure"
                    );
                    return None;
                }
            };

            match parse_tdk_response(value) {
                Some(def) => {
                    info!(
                        meanings = def.meanings.len(),
                        examples = def.examples.len(),
                        elapsed_micros = start.elapsed().as_micros(),
                        "lookup_success"
                    );
                    Some(def)
                }
                None => {
                    debug!(
                        elapsed_micros = start.elapsed().as_micros(),
                        "lookup_not_found"
                    );
                    None
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// In-memory gateway keyed by exact (trimmed) term.
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    definitions: HashMap<String, DefinitionResult>,
}

impl StaticGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, term: impl Into<String>, def: DefinitionResult) -> Self {
        self.definitions.insert(term.into(), def);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[async_trait]
impl LookupGateway for StaticGateway {
    async fn lookup_external(&self, term: &str) -> Option<DefinitionResult> {
        self.definitions.get(term.trim()).cloned()
    }
}
