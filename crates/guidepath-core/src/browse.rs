//! Category browsing
//!
//! Drives the workflow listing for one kind (apply or learn): category
//! filtering over the catalog's insertion-ordered list, with the resource
//! channel re-keyed on every category change.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{RecommendedResources, Workflow, WorkflowCatalog, WorkflowKind};
use crate::enrichment::{EnrichmentChannel, ResourceRecommender, Topic};
use crate::EngineError;

/// Listing of one workflow kind with an active category and its resources.
pub struct CategoryBrowser {
    catalog: Arc<dyn WorkflowCatalog>,
    recommender: Arc<dyn ResourceRecommender>,
    kind: WorkflowKind,
    workflows: Vec<Workflow>,
    category: Option<String>,
    resources: EnrichmentChannel<RecommendedResources>,
}

impl std::fmt::Debug for CategoryBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryBrowser")
            .field("kind", &self.kind)
            .field("category", &self.category)
            .field("workflow_count", &self.workflows.len())
            .finish()
    }
}

impl CategoryBrowser {
    /// Create an unloaded browser for one workflow kind
    pub fn new(
        catalog: Arc<dyn WorkflowCatalog>,
        recommender: Arc<dyn ResourceRecommender>,
        kind: WorkflowKind,
    ) -> Self {
        Self {
            catalog,
            recommender,
            kind,
            workflows: Vec::new(),
            category: None,
            resources: EnrichmentChannel::new(),
        }
    }

    /// Fetch the workflow list and the resources for the active category.
    ///
    /// A store failure propagates; the workflow list keeps its previous
    /// contents so the caller can retry.
    pub async fn load(&mut self) -> Result<(), EngineError> {
        debug!(kind = ?self.kind, "loading workflow listing");
        self.workflows = self.catalog.list_workflows(Some(self.kind)).await?;
        self.refresh_resources().await;
        Ok(())
    }

    /// Change the active category and re-key the resource fetch.
    ///
    /// `None` selects all categories.
    pub async fn select_category(&mut self, category: Option<String>) {
        self.category = category;
        self.refresh_resources().await;
    }

    async fn refresh_resources(&mut self) {
        let topic = Topic::for_category(self.kind, self.category.clone());
        let query = topic.query();
        debug!(%query, "refreshing category resources");
        let token = self.resources.begin();
        let outcome = self.recommender.recommend_resources(&query).await;
        self.resources.commit(token, outcome);
    }

    /// All loaded workflows of this kind, in store order
    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }

    /// Workflows matching the active category (all when none is selected)
    pub fn filtered(&self) -> Vec<&Workflow> {
        match &self.category {
            None => self.workflows.iter().collect(),
            Some(category) => self
                .workflows
                .iter()
                .filter(|w| &w.category == category)
                .collect(),
        }
    }

    /// The active category label, if any
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The committed resource groups for the active category
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
}
