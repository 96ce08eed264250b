//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::SubmitOutcome;
use crate::domain::conversation::{Message, Role};
use crate::domain::taxonomy::AnswerDomain;
use crate::domain::workflow::{Stage, StepStatus, WorkflowStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a question.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub question: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert: Option<AnswerDomain>,
    pub created_at: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            expert: message.expert(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}

/// The full ordered conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<MessageResponse>,
}

/// A workflow step for progress display.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStepResponse {
    pub stage: Stage,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&WorkflowStep> for WorkflowStepResponse {
    fn from(step: &WorkflowStep) -> Self {
        Self {
            stage: step.stage,
            status: step.status,
            note: step.note.clone(),
        }
    }
}

/// The current workflow sequence.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResponse {
    pub steps: Vec<WorkflowStepResponse>,
}

/// Response to a submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub outcome: &'static str,
    pub messages: Vec<MessageResponse>,
}

/// Maps a submit outcome to its wire label.
pub fn outcome_label(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Completed => "completed",
        SubmitOutcome::Failed => "failed",
        SubmitOutcome::RejectedBusy => "rejected_busy",
        SubmitOutcome::IgnoredBlank => "ignored_blank",
    }
}

/// Error payload for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_carries_expert_wire_name() {
        let message =
            Message::assistant("Creatures tap to attack.", AnswerDomain::CardType).unwrap();
        let response = MessageResponse::from(&message);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["expert"], "CARD_TYPE");
    }

    #[test]
    fn user_message_response_omits_expert() {
        let message = Message::user("What is the stack?").unwrap();
        let json = serde_json::to_value(MessageResponse::from(&message)).unwrap();

        assert_eq!(json["role"], "user");
        assert!(json.get("expert").is_none());
    }

    #[test]
    fn outcome_labels_are_stable() {
        assert_eq!(outcome_label(SubmitOutcome::Completed), "completed");
        assert_eq!(outcome_label(SubmitOutcome::Failed), "failed");
        assert_eq!(outcome_label(SubmitOutcome::RejectedBusy), "rejected_busy");
        assert_eq!(outcome_label(SubmitOutcome::IgnoredBlank), "ignored_blank");
    }
}
