//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{ChatSession, SubmitOutcome};

use super::dto::{
    outcome_label, ConversationResponse, ErrorResponse, MessageResponse, SubmitRequest,
    SubmitResponse, WorkflowResponse, WorkflowStepResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    session: Arc<ChatSession>,
}

impl ChatHandlers {
    pub fn new(session: Arc<ChatSession>) -> Self {
        Self { session }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat/messages - Submit a question
pub async fn submit_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    let outcome = handlers.session.submit(&req.question).await;

    match outcome {
        SubmitOutcome::Completed | SubmitOutcome::Failed => {
            let response = SubmitResponse {
                outcome: outcome_label(outcome),
                messages: message_responses(&handlers.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        SubmitOutcome::RejectedBusy => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("A request is already in flight")),
        )
            .into_response(),
        SubmitOutcome::IgnoredBlank => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Question cannot be blank")),
        )
            .into_response(),
    }
}

/// GET /api/chat/messages - Read the conversation
pub async fn get_messages(State(handlers): State<ChatHandlers>) -> Response {
    let response = ConversationResponse {
        messages: message_responses(&handlers.session),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/chat/workflow - Read the current workflow steps
pub async fn get_workflow(State(handlers): State<ChatHandlers>) -> Response {
    let steps = handlers
        .session
        .workflow_steps()
        .iter()
        .map(WorkflowStepResponse::from)
        .collect();
    (StatusCode::OK, Json(WorkflowResponse { steps })).into_response()
}

fn message_responses(session: &ChatSession) -> Vec<MessageResponse> {
    session.messages().iter().map(MessageResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;

    fn handlers_with(provider: MockAIProvider) -> ChatHandlers {
        ChatHandlers::new(Arc::new(ChatSession::new(Arc::new(provider))))
    }

    #[tokio::test]
    async fn submit_blank_question_is_bad_request() {
        let handlers = handlers_with(MockAIProvider::new());

        let response = submit_message(
            State(handlers),
            Json(SubmitRequest {
                question: "   ".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submit_question_returns_conversation() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"category": "GENERAL_RULES", "reasoning": "Rules basics."}"#)
            .with_response("You win by reducing opponents to zero life.");
        let handlers = handlers_with(provider);

        let response = submit_message(
            State(handlers.clone()),
            Json(SubmitRequest {
                question: "How do I win a game of Magic?".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let listing = get_messages(State(handlers)).await;
        assert_eq!(listing.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn workflow_endpoint_reports_steps() {
        let handlers = handlers_with(MockAIProvider::new());

        let response = get_workflow(State(handlers)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
