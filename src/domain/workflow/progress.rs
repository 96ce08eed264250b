//! Two-step workflow state machine for a single in-flight request.
//!
//! Pure domain logic: the sequence of transitions is validated here, while
//! scheduling (delays, resets) belongs to the session controller.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{Stage, StepStatus, WorkflowStep};

/// Ordered sequence of at most two workflow steps for the current request.
///
/// Valid transition order:
/// `idle → routing:active → routing:done → delegated:active →
/// delegated:done`, with either active step able to move to `failed`.
/// `clear` returns the sequence to idle from any state.
#[derive(Debug, Default)]
pub struct RequestWorkflow {
    steps: Vec<WorkflowStep>,
}

impl RequestWorkflow {
    /// Creates an idle (empty) workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no request is being tracked.
    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the tracked steps in order.
    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    /// Returns an owned copy of the tracked steps.
    pub fn snapshot(&self) -> Vec<WorkflowStep> {
        self.steps.clone()
    }

    /// Starts tracking a new request with an active routing step.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if a request is already tracked
    pub fn begin_routing(&mut self, note: impl Into<String>) -> Result<(), DomainError> {
        if !self.is_idle() {
            return Err(invalid_transition("routing may only begin from idle"));
        }
        self.steps.push(WorkflowStep::active(Stage::Routing, note));
        Ok(())
    }

    /// Marks the routing step done.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the routing step is not active
    pub fn complete_routing(&mut self, note: impl Into<String>) -> Result<(), DomainError> {
        let step = self
            .step_mut(Stage::Routing)
            .filter(|s| s.status == StepStatus::Active)
            .ok_or_else(|| invalid_transition("routing is not active"))?;
        step.status = StepStatus::Done;
        step.note = Some(note.into());
        Ok(())
    }

    /// Starts the delegated step; chained immediately after routing
    /// completes.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if routing is not done or delegation
    ///   already started
    pub fn begin_delegation(&mut self, note: impl Into<String>) -> Result<(), DomainError> {
        let routing_done = self
            .step_mut(Stage::Routing)
            .map(|s| s.status == StepStatus::Done)
            .unwrap_or(false);
        if !routing_done || self.steps.len() != 1 {
            return Err(invalid_transition(
                "delegation requires a completed routing step",
            ));
        }
        self.steps.push(WorkflowStep::active(Stage::Delegated, note));
        Ok(())
    }

    /// Marks the delegated step done.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the delegated step is not active
    pub fn complete_delegation(&mut self, note: impl Into<String>) -> Result<(), DomainError> {
        let step = self
            .step_mut(Stage::Delegated)
            .filter(|s| s.status == StepStatus::Active)
            .ok_or_else(|| invalid_transition("delegation is not active"))?;
        step.status = StepStatus::Done;
        step.note = Some(note.into());
        Ok(())
    }

    /// Marks whichever step is currently active as failed.
    ///
    /// Returns true if an active step was found.
    pub fn fail_active(&mut self, note: impl Into<String>) -> bool {
        let note = note.into();
        if let Some(step) = self
            .steps
            .iter_mut()
            .find(|s| s.status == StepStatus::Active)
        {
            step.status = StepStatus::Failed;
            step.note = Some(note);
            true
        } else {
            false
        }
    }

    /// Resets the sequence to idle.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    fn step_mut(&mut self, stage: Stage) -> Option<&mut WorkflowStep> {
        self.steps.iter_mut().find(|s| s.stage == stage)
    }
}

fn invalid_transition(message: &str) -> DomainError {
    DomainError::new(ErrorCode::InvalidStateTransition, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(workflow: &RequestWorkflow) -> Vec<(Stage, StepStatus)> {
        workflow
            .steps()
            .iter()
            .map(|s| (s.stage, s.status))
            .collect()
    }

    #[test]
    fn success_path_produces_expected_snapshots() {
        let mut workflow = RequestWorkflow::new();
        assert!(workflow.is_idle());

        workflow.begin_routing("Analyzing query category...").unwrap();
        assert_eq!(statuses(&workflow), vec![(Stage::Routing, StepStatus::Active)]);

        workflow.complete_routing("Classified as CARD_TYPE").unwrap();
        workflow.begin_delegation("Expert is crafting an answer...").unwrap();
        assert_eq!(
            statuses(&workflow),
            vec![
                (Stage::Routing, StepStatus::Done),
                (Stage::Delegated, StepStatus::Active),
            ]
        );

        workflow.complete_delegation("Response generated successfully.").unwrap();
        assert_eq!(
            statuses(&workflow),
            vec![
                (Stage::Routing, StepStatus::Done),
                (Stage::Delegated, StepStatus::Done),
            ]
        );

        workflow.clear();
        assert!(workflow.is_idle());
    }

    #[test]
    fn begin_routing_twice_is_rejected() {
        let mut workflow = RequestWorkflow::new();
        workflow.begin_routing("first").unwrap();
        let err = workflow.begin_routing("second").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn delegation_requires_completed_routing() {
        let mut workflow = RequestWorkflow::new();
        workflow.begin_routing("go").unwrap();
        assert!(workflow.begin_delegation("too early").is_err());
    }

    #[test]
    fn completing_inactive_steps_is_rejected() {
        let mut workflow = RequestWorkflow::new();
        assert!(workflow.complete_routing("nothing running").is_err());
        assert!(workflow.complete_delegation("nothing running").is_err());
    }

    #[test]
    fn fail_active_marks_routing_step() {
        let mut workflow = RequestWorkflow::new();
        workflow.begin_routing("go").unwrap();

        assert!(workflow.fail_active("Failed to process request."));
        assert_eq!(statuses(&workflow), vec![(Stage::Routing, StepStatus::Failed)]);
    }

    #[test]
    fn fail_active_marks_delegated_step() {
        let mut workflow = RequestWorkflow::new();
        workflow.begin_routing("go").unwrap();
        workflow.complete_routing("done").unwrap();
        workflow.begin_delegation("answering").unwrap();

        assert!(workflow.fail_active("Failed to process request."));
        assert_eq!(
            statuses(&workflow),
            vec![
                (Stage::Routing, StepStatus::Done),
                (Stage::Delegated, StepStatus::Failed),
            ]
        );
    }

    #[test]
    fn fail_active_with_no_active_step_reports_false() {
        let mut workflow = RequestWorkflow::new();
        assert!(!workflow.fail_active("nothing to fail"));
    }

    #[test]
    fn clear_resets_from_any_state() {
        let mut workflow = RequestWorkflow::new();
        workflow.begin_routing("go").unwrap();
        workflow.fail_active("boom");

        workflow.clear();
        assert!(workflow.is_idle());
        assert!(workflow.begin_routing("again").is_ok());
    }
}
