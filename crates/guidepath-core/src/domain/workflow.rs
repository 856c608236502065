use serde::{Deserialize, Serialize};

/// Value object: Workflow ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowId(pub String);

impl WorkflowId {
    /// Create a workflow ID from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value object: Step ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub String);

impl StepId {
    /// Create a step ID from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of procedure a workflow describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    /// Application process for a document or account
    Apply,
    /// Educational walkthrough of a topic
    Learn,
}

/// A titled, categorized procedure composed of ordered steps.
///
/// Immutable once created; lifecycle is owned entirely by the external
/// catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique identifier
    pub id: WorkflowId,

    /// Display title
    pub title: String,

    /// Short description
    pub description: String,

    /// Workflow kind
    #[serde(rename = "type")]
    pub kind: WorkflowKind,

    /// Free-form category label
    pub category: String,
}

/// One ordered unit of a workflow.
///
/// `order` is unique within a workflow and strictly ascending; gaps are
/// allowed, ties are not. Step lists are always surfaced sorted ascending
/// by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique identifier
    pub id: StepId,

    /// Owning workflow
    pub workflow_id: WorkflowId,

    /// Position within the workflow
    pub order: u32,

    /// Display title
    pub title: String,

    /// Short description
    pub description: String,

    /// Checklist item strings, rendered as-is
    #[serde(default)]
    pub checklist: Vec<String>,
}

/// A titled external link attached to a catalog step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier
    pub id: String,

    /// Owning step
    pub step_id: StepId,

    /// Display title
    pub title: String,

    /// Target URL
    pub url: String,
}

/// A titled external link produced by the recommendation service.
///
/// Transient: not persisted and not attributed to any step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Display title
    pub title: String,

    /// Target URL
    pub url: String,
}

/// Grouped recommendation result held by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedResources {
    /// Recommended articles
    #[serde(default)]
    pub articles: Vec<ResourceLink>,

    /// Recommended videos
    #[serde(default)]
    pub videos: Vec<ResourceLink>,
}

impl RecommendedResources {
    /// True when both groups are empty
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.videos.is_empty()
    }
}

/// Free-text guidance generated for a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Guidance text, possibly multi-paragraph
    pub text: String,
}

impl Explanation {
    /// Create an explanation from anything string-like
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Non-empty paragraphs, split on line breaks for display.
    ///
    /// No other parsing is applied to the text.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|line| !line.trim().is_empty())
    }

    /// True when there is no displayable text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
