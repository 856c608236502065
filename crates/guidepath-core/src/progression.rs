//! Progression state machine
//!
//! Owns the in-memory cursor over a workflow's ordered steps. The step list
//! is a snapshot taken at initialization and is never re-fetched
//! mid-traversal, even if the underlying store changes.

use crate::domain::{Step, Workflow};
use crate::EngineError;

/// Lifecycle of one workflow session.
///
/// `Ready` covers the whole traversal including the last step; "finish" is a
/// navigation-triggered exit, not a distinct state. `Empty` and `Failed` are
/// both left by re-invoking `initialize`.
#[derive(Debug)]
pub enum SessionState {
    /// No workflow opened yet
    Uninitialized,

    /// Catalog fetch in flight
    Loading,

    /// Traversal in progress
    Ready(Traversal),

    /// Workflow exists but has zero steps
    Empty {
        /// The workflow that was opened
        workflow: Workflow,
    },

    /// Catalog fetch failed; recoverable by re-initializing
    Failed {
        /// What went wrong
        error: EngineError,
    },
}

impl SessionState {
    /// True while a traversal is active
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready(_))
    }
}

/// Progression cursor: a workflow, its step snapshot, and the current index.
///
/// The index moves only via explicit [`advance`](Traversal::advance) and
/// [`retreat`](Traversal::retreat); it never wraps, overshoots, or
/// auto-advances.
#[derive(Debug, Clone)]
pub struct Traversal {
    workflow: Workflow,
    steps: Vec<Step>,
    index: usize,
}

impl Traversal {
    /// Create a traversal positioned at the first step.
    ///
    /// Returns `None` for an empty step list; zero-step workflows are an
    /// explicit empty condition, not a traversal.
    pub fn new(workflow: Workflow, steps: Vec<Step>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self {
            workflow,
            steps,
            index: 0,
        })
    }

    /// The workflow being traversed
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// The step snapshot, ascending by `order`
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step the cursor is on
    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    /// Zero-based cursor position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps in the snapshot
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a traversal holds at least one step
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True at index 0
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True at the last step
    pub fn is_last(&self) -> bool {
        self.index == self.steps.len() - 1
    }

    /// Move to the next step.
    ///
    /// Returns the new current step, or `None` (no-op) when already at the
    /// last step.
    pub fn advance(&mut self) -> Option<&Step> {
        if self.is_last() {
            return None;
        }
        self.index += 1;
        Some(&self.steps[self.index])
    }

    /// Move to the previous step.
    ///
    /// Returns the new current step, or `None` (no-op) at index 0.
    pub fn retreat(&mut self) -> Option<&Step> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.steps[self.index])
    }

    /// Fraction of the workflow reached: `(index + 1) / len`, in (0, 1].
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.steps.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StepId, WorkflowId, WorkflowKind};

    fn test_workflow() -> Workflow {
        Workflow {
            id: WorkflowId::new("wf-test"),
            title: "Test Workflow".to_string(),
            description: "A workflow for testing".to_string(),
            kind: WorkflowKind::Apply,
            category: "Government".to_string(),
        }
    }

    fn test_steps(count: u32) -> Vec<Step> {
        (1..=count)
            .map(|order| Step {
                id: StepId::new(format!("step-{}", order)),
                workflow_id: WorkflowId::new("wf-test"),
                order,
                title: format!("Step {}", order),
                description: format!("Description {}", order),
                checklist: vec![],
            })
            .collect()
    }

    #[test]
    fn test_empty_step_list_is_not_a_traversal() {
        assert!(Traversal::new(test_workflow(), vec![]).is_none());
    }

    #[test]
    fn test_advance_walks_to_last_step_then_stops() {
        let mut traversal = Traversal::new(test_workflow(), test_steps(4)).unwrap();
        assert_eq!(traversal.index(), 0);
        assert!(traversal.is_first());

        for expected in 1..4 {
            let step = traversal.advance().unwrap();
            assert_eq!(step.order, expected as u32 + 1);
            assert_eq!(traversal.index(), expected);
        }

        assert!(traversal.is_last());
        assert!(traversal.advance().is_none());
        assert_eq!(traversal.index(), 3);
    }

    #[test]
    fn test_retreat_rejected_at_first_step() {
        let mut traversal = Traversal::new(test_workflow(), test_steps(3)).unwrap();
        assert!(traversal.retreat().is_none());
        assert_eq!(traversal.index(), 0);

        traversal.advance();
        let step = traversal.retreat().unwrap();
        assert_eq!(step.order, 1);
        assert_eq!(traversal.index(), 0);
    }

    #[test]
    fn test_progress_fraction() {
        let mut traversal = Traversal::new(test_workflow(), test_steps(4)).unwrap();
        assert_eq!(traversal.progress(), 0.25);

        traversal.advance();
        assert_eq!(traversal.progress(), 0.5);

        traversal.advance();
        traversal.advance();
        assert_eq!(traversal.progress(), 1.0);

        // Boundary no-op leaves progress unchanged
        traversal.advance();
        assert_eq!(traversal.progress(), 1.0);
    }

    #[test]
    fn test_single_step_workflow_is_first_and_last() {
        let mut traversal = Traversal::new(test_workflow(), test_steps(1)).unwrap();
        assert!(traversal.is_first());
        assert!(traversal.is_last());
        assert_eq!(traversal.progress(), 1.0);
        assert!(traversal.advance().is_none());
        assert!(traversal.retreat().is_none());
    }

    #[test]
    fn test_session_state_readiness() {
        let traversal = Traversal::new(test_workflow(), test_steps(2)).unwrap();
        assert!(SessionState::Ready(traversal).is_ready());
        assert!(!SessionState::Uninitialized.is_ready());
        assert!(!SessionState::Loading.is_ready());
        assert!(!SessionState::Empty {
            workflow: test_workflow()
        }
        .is_ready());
        assert!(!SessionState::Failed {
            error: EngineError::StoreUnavailable("down".to_string())
        }
        .is_ready());
    }
}
