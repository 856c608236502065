//! Repository traits for the Guidepath engine
//!
//! This module defines the traits the engine uses to reach its external
//! collaborators. Other crates implement these traits to provide concrete
//! catalog and bookmark backends.

use async_trait::async_trait;

use super::bookmark::Bookmark;
use super::workflow::{Resource, Step, StepId, Workflow, WorkflowId, WorkflowKind};
use crate::EngineError;

/// Read-only access to the persistent workflow store.
///
/// Any call may fail with [`EngineError::StoreUnavailable`]; the engine
/// surfaces that as a loading-failure state instead of retrying internally.
#[async_trait]
pub trait WorkflowCatalog: Send + Sync {
    /// List workflows, optionally filtered by kind.
    ///
    /// Order is the store's insertion order; the engine imposes no sort.
    /// `None` returns workflows of all kinds.
    async fn list_workflows(
        &self,
        kind: Option<WorkflowKind>,
    ) -> Result<Vec<Workflow>, EngineError>;

    /// Find a workflow by ID. Absence is a recoverable empty state.
    async fn get_workflow(&self, id: &WorkflowId) -> Result<Option<Workflow>, EngineError>;

    /// List the steps of a workflow, sorted ascending by `order`.
    ///
    /// An empty list is valid; callers surface it as an explicit
    /// empty-workflow condition rather than an error.
    async fn list_steps(&self, workflow_id: &WorkflowId) -> Result<Vec<Step>, EngineError>;

    /// List the catalog-attached resources of one step (may be empty).
    async fn list_step_resources(&self, step_id: &StepId) -> Result<Vec<Resource>, EngineError>;
}

/// Durable set of bookmarked workflows, keyed by workflow id.
///
/// Survives process restarts. Storage-layer failures must not crash the
/// engine: read corruption degrades to an empty set, failed writes leave
/// prior state intact and surface [`EngineError::BookmarkPersistence`].
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Membership test over the current persisted set
    async fn is_bookmarked(&self, workflow_id: &WorkflowId) -> Result<bool, EngineError>;

    /// Insert if absent, remove if present; write-through before returning.
    ///
    /// Returns the new membership state.
    async fn toggle(&self, workflow_id: &WorkflowId, title: &str) -> Result<bool, EngineError>;

    /// All entries, in storage order
    async fn list(&self) -> Result<Vec<Bookmark>, EngineError>;

    /// Idempotent removal; absence is not an error
    async fn remove(&self, workflow_id: &WorkflowId) -> Result<(), EngineError>;
}
