//! Enrichment coordination
//!
//! Two independent channels (step explanation, topic resources) share one
//! concurrency discipline: every fetch is tagged with a [`RequestToken`]
//! minted when it starts, and its result is committed only if the token
//! still matches the channel generation when it completes. A fetch whose
//! key was superseded mid-flight is discarded on arrival, so a slow earlier
//! fetch can never overwrite a faster later one.
//!
//! Results are not cached across keys: revisiting a step or topic re-issues
//! the fetch.

/// Topic derivation for the resource channel
pub mod topic;

pub use topic::Topic;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{Explanation, RecommendedResources};
use crate::EngineError;

/// Generates free-text guidance for one step of a workflow.
#[async_trait]
pub trait ExplanationService: Send + Sync {
    /// Generate guidance for a step in the context of its workflow.
    async fn generate_explanation(
        &self,
        step_title: &str,
        workflow_title: &str,
    ) -> Result<Explanation, EngineError>;
}

/// Recommends grouped article/video links for a topic string.
#[async_trait]
pub trait ResourceRecommender: Send + Sync {
    /// Recommend resources for a topic.
    async fn recommend_resources(&self, topic: &str)
        -> Result<RecommendedResources, EngineError>;
}

/// Ties an in-flight fetch to the channel generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

/// One enrichment channel.
///
/// At most one outstanding request is authoritative at any time; a
/// [`begin`](EnrichmentChannel::begin) supersedes whatever was in flight.
#[derive(Debug, Default)]
pub struct EnrichmentChannel<T> {
    generation: u64,
    loading: bool,
    unavailable: bool,
    value: T,
}

impl<T: Default> EnrichmentChannel<T> {
    /// Create an idle channel holding the default value
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: bump the generation and mark the channel loading.
    ///
    /// Any previously issued token is stale from this point on.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.loading = true;
        RequestToken {
            generation: self.generation,
        }
    }

    /// Commit a fetch outcome.
    ///
    /// Applies only when `token` matches the current generation; a stale
    /// token leaves the channel untouched and returns `false`. A failed
    /// outcome resets the value and raises the `unavailable` indicator.
    pub fn commit(&mut self, token: RequestToken, outcome: Result<T, EngineError>) -> bool {
        if token.generation != self.generation {
            debug!(
                token = token.generation,
                current = self.generation,
                "discarding stale enrichment result"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(value) => {
                self.value = value;
                self.unavailable = false;
            }
            Err(error) => {
                debug!(%error, "enrichment fetch failed, holding empty result");
                self.value = T::default();
                self.unavailable = true;
            }
        }
        true
    }

    /// True while the latest fetch is still outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the latest committed fetch failed
    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    /// The committed value
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Pairs the explanation and resource channels with their services.
pub struct EnrichmentCoordinator {
    explanations: Arc<dyn ExplanationService>,
    recommender: Arc<dyn ResourceRecommender>,
    explanation: EnrichmentChannel<Explanation>,
    resources: EnrichmentChannel<RecommendedResources>,
    topic: Option<Topic>,
}

impl std::fmt::Debug for EnrichmentCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentCoordinator")
            .field("explanation", &self.explanation)
            .field("resources", &self.resources)
            .field("topic", &self.topic)
            .finish()
    }
}

impl EnrichmentCoordinator {
    /// Create a coordinator over the two enrichment services
    pub fn new(
        explanations: Arc<dyn ExplanationService>,
        recommender: Arc<dyn ResourceRecommender>,
    ) -> Self {
        Self {
            explanations,
            recommender,
            explanation: EnrichmentChannel::new(),
            resources: EnrichmentChannel::new(),
            topic: None,
        }
    }

    /// The explanation service, for hosts that spawn their own fetches
    pub fn explanation_service(&self) -> Arc<dyn ExplanationService> {
        Arc::clone(&self.explanations)
    }

    /// The recommendation service, for hosts that spawn their own fetches
    pub fn recommender(&self) -> Arc<dyn ResourceRecommender> {
        Arc::clone(&self.recommender)
    }

    /// Start an explanation fetch and return its token
    pub fn begin_explanation(&mut self) -> RequestToken {
        self.explanation.begin()
    }

    /// Commit an explanation outcome; returns false for a stale token
    pub fn commit_explanation(
        &mut self,
        token: RequestToken,
        outcome: Result<Explanation, EngineError>,
    ) -> bool {
        self.explanation.commit(token, outcome)
    }

    /// Start a resource fetch for a topic and return its token
    pub fn begin_resources(&mut self, topic: Topic) -> RequestToken {
        self.topic = Some(topic);
        self.resources.begin()
    }

    /// Commit a resource outcome; returns false for a stale token
    pub fn commit_resources(
        &mut self,
        token: RequestToken,
        outcome: Result<RecommendedResources, EngineError>,
    ) -> bool {
        self.resources.commit(token, outcome)
    }

    /// Fetch and commit guidance for a step, inline.
    ///
    /// A failure commits an empty result and raises the unavailable
    /// indicator; it is never propagated, so navigation stays operable.
    pub async fn refresh_explanation(&mut self, step_title: &str, workflow_title: &str) {
        debug!(step_title, workflow_title, "refreshing step explanation");
        let token = self.explanation.begin();
        let outcome = self
            .explanations
            .generate_explanation(step_title, workflow_title)
            .await;
        self.explanation.commit(token, outcome);
    }

    /// Fetch and commit recommendations for a topic, inline.
    pub async fn refresh_resources(&mut self, topic: Topic) {
        let query = topic.query();
        debug!(%query, "refreshing recommended resources");
        let token = self.begin_resources(topic);
        let outcome = self.recommender.recommend_resources(&query).await;
        self.resources.commit(token, outcome);
    }

    /// The committed explanation
    pub fn explanation(&self) -> &Explanation {
        self.explanation.value()
    }

    /// True while an explanation fetch is outstanding
    pub fn explanation_loading(&self) -> bool {
        self.explanation.is_loading()
    }

    /// True when the latest explanation fetch failed
    pub fn explanation_unavailable(&self) -> bool {
        self.explanation.is_unavailable()
    }

    /// The committed resource groups
    pub fn resources(&self) -> &RecommendedResources {
        self.resources.value()
    }

    /// True while a resource fetch is outstanding
    pub fn resources_loading(&self) -> bool {
        self.resources.is_loading()
    }

    /// True when the latest resource fetch failed
    pub fn resources_unavailable(&self) -> bool {
        self.resources.is_unavailable()
    }

    /// The topic of the latest resource fetch
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }
}
