//! Application layer - Use-case clients and the session controller.
//!
//! The classifier and dispatcher wrap the AI provider port with the
//! system's fallback policies; `ChatSession` sequences them into the
//! two-phase dispatch workflow.

mod classifier;
mod dispatcher;
mod outcome;
mod session;

pub use classifier::{ClassificationResult, Classifier};
pub use dispatcher::{WorkerAnswer, WorkerDispatcher};
pub use outcome::ResultOrigin;
pub use session::{ChatSession, SubmitOutcome};
