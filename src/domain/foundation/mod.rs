//! Foundation - Shared value objects for the domain layer.
//!
//! Identifiers, timestamps, and error types used across every other
//! domain module.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{MessageId, SessionId};
pub use timestamp::Timestamp;
