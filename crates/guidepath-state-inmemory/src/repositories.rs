//! In-memory repository implementations

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use guidepath_core::{
    Bookmark, BookmarkStore, EngineError, Resource, Step, StepId, Workflow, WorkflowCatalog,
    WorkflowId, WorkflowKind,
};

#[derive(Default)]
struct CatalogData {
    // Insertion order is the listing order
    workflows: Vec<Workflow>,
    // Keyed by workflow id
    steps: HashMap<String, Vec<Step>>,
    // Keyed by step id
    resources: HashMap<String, Vec<Resource>>,
}

/// In-memory implementation of the workflow catalog.
///
/// Read-only through the trait; content is loaded through the `insert_*`
/// methods. The `set_unavailable` switch makes every trait call fail with
/// `StoreUnavailable`, which tests use to drive failure paths.
pub struct InMemoryWorkflowCatalog {
    inner: Arc<RwLock<CatalogData>>,
    unavailable: AtomicBool,
}

impl InMemoryWorkflowCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogData::default())),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Add a workflow; listing order follows insertion order
    pub async fn insert_workflow(&self, workflow: Workflow) {
        let mut data = self.inner.write().await;
        data.steps.entry(workflow.id.0.clone()).or_default();
        data.workflows.push(workflow);
    }

    /// Add a step to its workflow
    pub async fn insert_step(&self, step: Step) {
        let mut data = self.inner.write().await;
        data.steps
            .entry(step.workflow_id.0.clone())
            .or_default()
            .push(step);
    }

    /// Attach a resource to its step
    pub async fn insert_resource(&self, resource: Resource) {
        let mut data = self.inner.write().await;
        data.resources
            .entry(resource.step_id.0.clone())
            .or_default()
            .push(resource);
    }

    /// Make every catalog call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), EngineError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(EngineError::StoreUnavailable(
                "in-memory catalog marked unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryWorkflowCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkflowCatalog for InMemoryWorkflowCatalog {
    async fn list_workflows(
        &self,
        kind: Option<WorkflowKind>,
    ) -> Result<Vec<Workflow>, EngineError> {
        self.check_available()?;
        let data = self.inner.read().await;
        Ok(data
            .workflows
            .iter()
            .filter(|w| kind.map_or(true, |k| w.kind == k))
            .cloned()
            .collect())
    }

    async fn get_workflow(&self, id: &WorkflowId) -> Result<Option<Workflow>, EngineError> {
        self.check_available()?;
        let data = self.inner.read().await;
        Ok(data.workflows.iter().find(|w| &w.id == id).cloned())
    }

    async fn list_steps(&self, workflow_id: &WorkflowId) -> Result<Vec<Step>, EngineError> {
        self.check_available()?;
        let data = self.inner.read().await;
        let mut steps = data
            .steps
            .get(&workflow_id.0)
            .cloned()
            .unwrap_or_default();
        steps.sort_by_key(|step| step.order);
        debug!(workflow_id = %workflow_id, count = steps.len(), "listing steps");
        Ok(steps)
    }

    async fn list_step_resources(&self, step_id: &StepId) -> Result<Vec<Resource>, EngineError> {
        self.check_available()?;
        let data = self.inner.read().await;
        Ok(data.resources.get(&step_id.0).cloned().unwrap_or_default())
    }
}

/// In-memory implementation of the bookmark store.
///
/// Durable only for the process lifetime; the file-backed store provides
/// persistence across restarts.
pub struct InMemoryBookmarkStore {
    entries: Arc<RwLock<Vec<Bookmark>>>,
}

impl InMemoryBookmarkStore {
    /// Create an empty bookmark set
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn is_bookmarked(&self, workflow_id: &WorkflowId) -> Result<bool, EngineError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().any(|b| &b.workflow_id == workflow_id))
    }

    async fn toggle(&self, workflow_id: &WorkflowId, title: &str) -> Result<bool, EngineError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|b| &b.workflow_id == workflow_id) {
            entries.retain(|b| &b.workflow_id != workflow_id);
            debug!(workflow_id = %workflow_id, "bookmark removed");
            Ok(false)
        } else {
            entries.push(Bookmark::new(workflow_id.clone(), title));
            debug!(workflow_id = %workflow_id, "bookmark added");
            Ok(true)
        }
    }

    async fn list(&self) -> Result<Vec<Bookmark>, EngineError> {
        Ok(self.entries.read().await.clone())
    }

    async fn remove(&self, workflow_id: &WorkflowId) -> Result<(), EngineError> {
        let mut entries = self.entries.write().await;
        entries.retain(|b| &b.workflow_id != workflow_id);
        Ok(())
    }
}
