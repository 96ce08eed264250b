//! HTTP adapters - delivery surface for the session boundary.

pub mod chat;

use axum::{routing::get, Router};

use chat::{chat_routes, ChatHandlers};

/// Builds the application router.
pub fn app_router(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/chat", chat_routes(handlers))
}

/// GET /health - liveness probe
async fn health() -> &'static str {
    "ok"
}
