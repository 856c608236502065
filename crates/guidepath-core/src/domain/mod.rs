//! Domain layer - core entities and collaborator traits

/// Bookmark entity
pub mod bookmark;

/// Collaborator repository traits
pub mod repository;

/// Workflow, step, and resource entities
pub mod workflow;

pub use bookmark::Bookmark;
pub use repository::{BookmarkStore, WorkflowCatalog};
pub use workflow::{
    Explanation, RecommendedResources, Resource, ResourceLink, Step, StepId, Workflow, WorkflowId,
    WorkflowKind,
};
