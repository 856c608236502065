//! HTTP client for the enrichment service
//!
//! One client implements both service traits; the explanation and
//! recommendation endpoints live on the same host in every deployment so
//! far. Transport failures and non-success statuses map to
//! `EngineError::EnrichmentUnavailable`; a response with a missing or
//! malformed `resources` field degrades to empty groups instead.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use guidepath_core::{
    EngineError, Explanation, ExplanationService, RecommendedResources, ResourceRecommender,
};

use crate::config::EnrichmentConfig;

/// Client for the explanation and recommendation endpoints.
#[derive(Debug, Clone)]
pub struct EnrichmentClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ExplanationRequest<'a> {
    topic: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct ExplanationResponse {
    #[serde(default)]
    explanation: String,
}

#[derive(Serialize)]
struct RecommendRequest<'a> {
    topic: &'a str,
}

impl EnrichmentClient {
    /// Build a client from configuration
    pub fn new(config: &EnrichmentConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| EngineError::EnrichmentUnavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ExplanationService for EnrichmentClient {
    async fn generate_explanation(
        &self,
        step_title: &str,
        workflow_title: &str,
    ) -> Result<Explanation, EngineError> {
        debug!(step_title, workflow_title, "requesting explanation");

        let response = self
            .http
            .post(self.endpoint("generate-explanation"))
            .json(&ExplanationRequest {
                topic: step_title,
                context: workflow_title,
            })
            .send()
            .await
            .map_err(|e| EngineError::EnrichmentUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EngineError::EnrichmentUnavailable(format!(
                "explanation service returned {}",
                response.status()
            )));
        }

        let body: ExplanationResponse = response
            .json()
            .await
            .map_err(|e| EngineError::EnrichmentUnavailable(e.to_string()))?;

        Ok(Explanation::new(body.explanation))
    }
}

#[async_trait]
impl ResourceRecommender for EnrichmentClient {
    async fn recommend_resources(
        &self,
        topic: &str,
    ) -> Result<RecommendedResources, EngineError> {
        debug!(topic, "requesting recommended resources");

        let response = self
            .http
            .post(self.endpoint("recommend-resources"))
            .json(&RecommendRequest { topic })
            .send()
            .await
            .map_err(|e| EngineError::EnrichmentUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EngineError::EnrichmentUnavailable(format!(
                "recommendation service returned {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EngineError::EnrichmentUnavailable(e.to_string()))?;

        // A missing or malformed `resources` field resets to empty groups
        // rather than surfacing partial data.
        let resources = match body.get("resources") {
            Some(raw) => serde_json::from_value::<RecommendedResources>(raw.clone())
                .unwrap_or_else(|error| {
                    warn!(%error, "malformed resources payload, resetting to empty groups");
                    RecommendedResources::default()
                }),
            None => {
                warn!(topic, "recommendation response missing resources field");
                RecommendedResources::default()
            }
        };

        Ok(resources)
    }
}
