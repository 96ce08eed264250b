//! Chat HTTP adapter - exposes the session boundary over JSON endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConversationResponse, ErrorResponse, MessageResponse, SubmitRequest, SubmitResponse,
    WorkflowResponse, WorkflowStepResponse,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
