//! Workflow step records for progress display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stage of the two-phase dispatch workflow a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Classification of the question into an answer domain.
    Routing,
    /// Answer generation by the selected domain expert.
    Delegated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Routing => write!(f, "routing"),
            Stage::Delegated => write!(f, "delegated"),
        }
    }
}

/// Progress status of a workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Not yet started.
    Pending,
    /// Currently executing.
    Active,
    /// Finished successfully (or with an internal fallback).
    Done,
    /// Aborted by an uncaught failure.
    Failed,
}

impl StepStatus {
    /// Returns true if this status is terminal for the step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Done | StepStatus::Failed)
    }
}

/// A transient record of progress for the current in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Which stage this step tracks.
    pub stage: Stage,
    /// Current status.
    pub status: StepStatus,
    /// Optional display text describing what the step is doing.
    pub note: Option<String>,
}

impl WorkflowStep {
    /// Creates an active step with a display note.
    pub fn active(stage: Stage, note: impl Into<String>) -> Self {
        Self {
            stage,
            status: StepStatus::Active,
            note: Some(note.into()),
        }
    }
}
