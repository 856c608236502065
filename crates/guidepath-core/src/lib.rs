//!
//! Guidepath Core - Guided workflow progression engine
//!
//! This crate defines the domain model, collaborator traits, and the
//! progression engine itself: step-by-step navigation with progress
//! tracking, staleness-safe enrichment coordination, and bookmark handling.
//! Other crates in the workspace provide concrete catalog, bookmark, and
//! enrichment-service backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - core business models and collaborator traits
pub mod domain;

/// Error types
pub mod error;

/// Enrichment coordination
pub mod enrichment;

/// Progression state machine
pub mod progression;

/// Workflow session orchestration
pub mod session;

/// Category browsing
pub mod browse;

// Re-export key types
pub use browse::CategoryBrowser;
pub use domain::{
    Bookmark, BookmarkStore, Explanation, RecommendedResources, Resource, ResourceLink, Step,
    StepId, Workflow, WorkflowCatalog, WorkflowId, WorkflowKind,
};
pub use enrichment::{
    EnrichmentChannel, EnrichmentCoordinator, ExplanationService, RequestToken,
    ResourceRecommender, Topic,
};
pub use error::EngineError;
pub use progression::{SessionState, Traversal};
pub use session::WorkflowSession;
