//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_messages, get_workflow, submit_message, ChatHandlers};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/messages", post(submit_message).get(get_messages))
        .route("/workflow", get(get_workflow))
        .with_state(handlers)
}
