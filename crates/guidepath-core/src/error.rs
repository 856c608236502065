use thiserror::Error;

/// Core error type for the Guidepath engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested workflow absent from the catalog
    #[error("Workflow not found: {0}")]
    WorkflowNotFound(String),

    /// Catalog query failed
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),

    /// Explanation or recommendation call failed or returned malformed data
    #[error("Enrichment unavailable: {0}")]
    EnrichmentUnavailable(String),

    /// Durable bookmark read/write failed
    #[error("Bookmark persistence error: {0}")]
    BookmarkPersistence(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

impl From<String> for EngineError {
    fn from(err: String) -> Self {
        EngineError::Other(err)
    }
}

impl From<&str> for EngineError {
    fn from(err: &str) -> Self {
        EngineError::Other(err.to_string())
    }
}
