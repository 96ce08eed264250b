//! Worker Dispatcher - Generates an answer under a selected domain.
//!
//! Issues a single request configured with the domain's instruction text.
//! Transport failures and empty content never propagate past this boundary:
//! the dispatcher substitutes a fixed apology string so the workflow always
//! completes.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::taxonomy::{instruction_for, AnswerDomain};
use crate::ports::{AIProvider, CompletionRequest, FinishReason};

use super::ResultOrigin;

/// Sampling temperature for answer generation. The material is
/// exploratory/explanatory, so moderate variation is preferred over
/// determinism.
const WORKER_TEMPERATURE: f32 = 0.7;

/// Fixed apology returned when the worker call fails or yields nothing.
const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't generate a response for that.";

/// Answer produced by a worker call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAnswer {
    /// Trimmed answer text; never empty.
    pub content: String,
    /// Whether this answer came from the model or the local fallback.
    pub origin: ResultOrigin,
}

impl WorkerAnswer {
    fn fallback() -> Self {
        Self {
            content: FALLBACK_ANSWER.to_string(),
            origin: ResultOrigin::Fallback,
        }
    }
}

/// Client for per-domain answer generation.
#[derive(Clone)]
pub struct WorkerDispatcher {
    provider: Arc<dyn AIProvider>,
}

impl WorkerDispatcher {
    /// Creates a new dispatcher backed by the given provider.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Generates an answer for a question under the given answer domain.
    ///
    /// Single attempt, no retry. Never fails and never returns empty text:
    /// provider errors, filtered output, and empty content all degrade to
    /// the fixed apology string.
    pub async fn answer(&self, domain: AnswerDomain, question: &str) -> WorkerAnswer {
        let request = CompletionRequest::new(
            instruction_for(domain.into()),
            format!("User Question: {}", question),
        )
        .with_temperature(WORKER_TEMPERATURE);

        match self.provider.complete(request).await {
            Ok(response) => {
                if response.finish_reason == FinishReason::ContentFilter {
                    warn!(domain = %domain.wire_name(), "worker output was filtered, using fallback");
                    return WorkerAnswer::fallback();
                }

                let content = response.content.trim();
                if content.is_empty() {
                    warn!(domain = %domain.wire_name(), "worker returned empty content, using fallback");
                    return WorkerAnswer::fallback();
                }

                debug!(
                    domain = %domain.wire_name(),
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "worker answer completed"
                );
                WorkerAnswer {
                    content: content.to_string(),
                    origin: ResultOrigin::Model,
                }
            }
            Err(err) => {
                warn!(
                    domain = %domain.wire_name(),
                    error = %err,
                    retryable = err.is_retryable(),
                    "worker call failed, using fallback"
                );
                WorkerAnswer::fallback()
            }
        }
    }
}
