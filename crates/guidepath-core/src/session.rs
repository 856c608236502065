//! Workflow session orchestration
//!
//! [`WorkflowSession`] wires the catalog, the bookmark store, and the
//! enrichment coordinator around one progression cursor. All collaborator
//! failures are absorbed into session state or degraded results; nothing
//! here terminates the hosting process.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{BookmarkStore, Resource, Step, WorkflowCatalog, WorkflowId};
use crate::enrichment::{
    EnrichmentCoordinator, ExplanationService, ResourceRecommender, Topic,
};
use crate::progression::{SessionState, Traversal};
use crate::EngineError;

/// One user's traversal of one workflow.
pub struct WorkflowSession {
    catalog: Arc<dyn WorkflowCatalog>,
    bookmarks: Arc<dyn BookmarkStore>,
    enrichment: EnrichmentCoordinator,
    state: SessionState,
    bookmarked: bool,
}

impl std::fmt::Debug for WorkflowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowSession")
            .field("state", &self.state)
            .field("bookmarked", &self.bookmarked)
            .finish()
    }
}

impl WorkflowSession {
    /// Create an uninitialized session over the given collaborators
    pub fn new(
        catalog: Arc<dyn WorkflowCatalog>,
        bookmarks: Arc<dyn BookmarkStore>,
        explanations: Arc<dyn ExplanationService>,
        recommender: Arc<dyn ResourceRecommender>,
    ) -> Self {
        Self {
            catalog,
            bookmarks,
            enrichment: EnrichmentCoordinator::new(explanations, recommender),
            state: SessionState::Uninitialized,
            bookmarked: false,
        }
    }

    /// Open a workflow: fetch its metadata and step list, snapshot them,
    /// consult the bookmark set once, and fire the initial enrichment.
    ///
    /// Ends in `Ready`, `Empty` (zero steps), or `Failed` (missing workflow
    /// or store failure). `Failed` is recoverable by calling `initialize`
    /// again once the store is reachable.
    pub async fn initialize(&mut self, id: &WorkflowId) {
        info!(workflow_id = %id, "initializing workflow session");
        self.state = SessionState::Loading;
        self.bookmarked = false;

        let workflow = match self.catalog.get_workflow(id).await {
            Ok(Some(workflow)) => workflow,
            Ok(None) => {
                warn!(workflow_id = %id, "workflow not found");
                self.state = SessionState::Failed {
                    error: EngineError::WorkflowNotFound(id.0.clone()),
                };
                return;
            }
            Err(error) => {
                warn!(workflow_id = %id, %error, "workflow fetch failed");
                self.state = SessionState::Failed { error };
                return;
            }
        };

        let steps = match self.catalog.list_steps(id).await {
            Ok(steps) => steps,
            Err(error) => {
                warn!(workflow_id = %id, %error, "step fetch failed");
                self.state = SessionState::Failed { error };
                return;
            }
        };

        // Consulted once per session; a failed read degrades to "not
        // bookmarked" instead of failing initialization.
        self.bookmarked = match self.bookmarks.is_bookmarked(id).await {
            Ok(saved) => saved,
            Err(error) => {
                warn!(workflow_id = %id, %error, "bookmark read failed");
                false
            }
        };

        let Some(traversal) = Traversal::new(workflow.clone(), steps) else {
            debug!(workflow_id = %id, "workflow has no steps");
            self.state = SessionState::Empty { workflow };
            return;
        };

        let step_title = traversal.current_step().title.clone();
        let workflow_title = traversal.workflow().title.clone();
        self.state = SessionState::Ready(traversal);

        self.enrichment
            .refresh_explanation(&step_title, &workflow_title)
            .await;
        self.enrichment
            .refresh_resources(Topic::for_workflow(workflow_title))
            .await;
    }

    /// Move to the next step and refresh its explanation.
    ///
    /// Returns `false` (no-op) at the last step or outside `Ready`.
    pub async fn advance(&mut self) -> bool {
        let moved = match &mut self.state {
            SessionState::Ready(traversal) => {
                if traversal.advance().is_some() {
                    Some((
                        traversal.current_step().title.clone(),
                        traversal.workflow().title.clone(),
                    ))
                } else {
                    None
                }
            }
            _ => None,
        };

        match moved {
            Some((step_title, workflow_title)) => {
                self.enrichment
                    .refresh_explanation(&step_title, &workflow_title)
                    .await;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step and refresh its explanation.
    ///
    /// Returns `false` (no-op) at the first step or outside `Ready`.
    pub async fn retreat(&mut self) -> bool {
        let moved = match &mut self.state {
            SessionState::Ready(traversal) => {
                if traversal.retreat().is_some() {
                    Some((
                        traversal.current_step().title.clone(),
                        traversal.workflow().title.clone(),
                    ))
                } else {
                    None
                }
            }
            _ => None,
        };

        match moved {
            Some((step_title, workflow_title)) => {
                self.enrichment
                    .refresh_explanation(&step_title, &workflow_title)
                    .await;
                true
            }
            None => false,
        }
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The step the cursor is on, when `Ready`
    pub fn current_step(&self) -> Option<&Step> {
        match &self.state {
            SessionState::Ready(traversal) => Some(traversal.current_step()),
            _ => None,
        }
    }

    /// One-based position and step count, when `Ready`
    pub fn position(&self) -> Option<(usize, usize)> {
        match &self.state {
            SessionState::Ready(traversal) => Some((traversal.index() + 1, traversal.len())),
            _ => None,
        }
    }

    /// Progress fraction in (0, 1], when `Ready`
    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            SessionState::Ready(traversal) => Some(traversal.progress()),
            _ => None,
        }
    }

    /// Catalog-attached resources of the current step.
    ///
    /// Empty outside `Ready`; a store failure propagates for the caller to
    /// surface as a degraded list.
    pub async fn step_resources(&self) -> Result<Vec<Resource>, EngineError> {
        match self.current_step() {
            Some(step) => self.catalog.list_step_resources(&step.id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Whether the open workflow is bookmarked
    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Toggle the open workflow's bookmark; returns the new state.
    ///
    /// A persistence failure leaves both the store and the session's
    /// membership flag unchanged.
    pub async fn toggle_bookmark(&mut self) -> Result<bool, EngineError> {
        let (id, title) = match &self.state {
            SessionState::Ready(traversal) => (
                traversal.workflow().id.clone(),
                traversal.workflow().title.clone(),
            ),
            SessionState::Empty { workflow } => (workflow.id.clone(), workflow.title.clone()),
            _ => return Err(EngineError::Other("no workflow open".to_string())),
        };

        let saved = self.bookmarks.toggle(&id, &title).await?;
        self.bookmarked = saved;
        Ok(saved)
    }

    /// Enrichment channels for display
    pub fn enrichment(&self) -> &EnrichmentCoordinator {
        &self.enrichment
    }

    /// Mutable enrichment access for hosts that spawn their own fetches
    /// and commit by token
    pub fn enrichment_mut(&mut self) -> &mut EnrichmentCoordinator {
        &mut self.enrichment
    }
}
