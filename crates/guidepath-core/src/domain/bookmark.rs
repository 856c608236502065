use serde::{Deserialize, Serialize};

use super::workflow::WorkflowId;

/// A user's saved reference to a workflow.
///
/// Set semantics: a workflow id appears at most once in a bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmarked workflow
    pub workflow_id: WorkflowId,

    /// Workflow title at save time, kept for display without a catalog query
    pub title: String,
}

impl Bookmark {
    /// Create a bookmark for a workflow
    pub fn new(workflow_id: WorkflowId, title: impl Into<String>) -> Self {
        Self {
            workflow_id,
            title: title.into(),
        }
    }
}
