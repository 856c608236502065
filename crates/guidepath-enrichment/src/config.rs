//! Configuration for the enrichment clients
//!
//! Defaults target a locally running enrichment service and can be
//! overridden through environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Enrichment client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Base URL of the enrichment service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl EnrichmentConfig {
    /// Load configuration from environment variables over the defaults
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("ENRICHMENT_SERVICE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = env::var("ENRICHMENT_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                config.request_timeout_secs = timeout;
            } else {
                warn!("Invalid ENRICHMENT_TIMEOUT_SECS value: {}", timeout);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnrichmentConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5001");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: EnrichmentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5001");

        let config: EnrichmentConfig =
            serde_json::from_str(r#"{"base_url": "http://ai.internal:5001"}"#).unwrap();
        assert_eq!(config.base_url, "http://ai.internal:5001");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
