//! Classifier Client - Routes a question to an answer domain.
//!
//! Issues a single structured-output request configured with the routing
//! instruction. Transport and parse failures never propagate past this
//! boundary: the classifier degrades to the general-rules domain so the
//! workflow always proceeds to a worker step.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::taxonomy::{instruction_for, AnswerDomain, Domain};
use crate::ports::{AIError, AIProvider, CompletionRequest};

use super::ResultOrigin;

/// Rationale attached to the fallback classification.
const FALLBACK_RATIONALE: &str = "Fallback due to parsing error.";

/// Result of classifying a question.
///
/// `domain` is typed as [`AnswerDomain`], so the routing domain can never
/// be produced, on the success path or the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// The answer domain the question belongs to.
    pub domain: AnswerDomain,
    /// The model's (or fallback's) reasoning.
    pub rationale: String,
    /// Whether this result came from the model or a local fallback.
    pub origin: ResultOrigin,
}

impl ClassificationResult {
    fn fallback() -> Self {
        Self {
            domain: AnswerDomain::GeneralRules,
            rationale: FALLBACK_RATIONALE.to_string(),
            origin: ResultOrigin::Fallback,
        }
    }
}

/// Structured payload the model is asked to produce.
#[derive(Debug, Deserialize)]
struct ClassificationPayload {
    category: AnswerDomain,
    reasoning: String,
}

/// Client for the classification call.
#[derive(Clone)]
pub struct Classifier {
    provider: Arc<dyn AIProvider>,
}

impl Classifier {
    /// Creates a new classifier backed by the given provider.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Classifies a question into an answer domain.
    ///
    /// Single attempt, no retry. Never fails: provider or parse errors
    /// degrade to the general-rules fallback.
    pub async fn classify(&self, question: &str) -> ClassificationResult {
        let request =
            CompletionRequest::new(instruction_for(Domain::Orchestrator), question)
                .with_response_schema(classification_schema());

        match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "classification completed"
                );
                match parse_classification(&response.content) {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(error = %err, "classification payload unparsable, using fallback");
                        ClassificationResult::fallback()
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, retryable = err.is_retryable(), "classification call failed, using fallback");
                ClassificationResult::fallback()
            }
        }
    }
}

/// JSON Schema constraining classification output.
///
/// The `category` enumeration is built from [`AnswerDomain::all`], so the
/// routing domain is never offered to the model as a valid output.
fn classification_schema() -> serde_json::Value {
    let categories: Vec<&str> = AnswerDomain::all().iter().map(|d| d.wire_name()).collect();
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "category": {
                "type": "STRING",
                "enum": categories,
                "description": "The category the question belongs to."
            },
            "reasoning": {
                "type": "STRING",
                "description": "Why this category was chosen."
            }
        },
        "required": ["category", "reasoning"]
    })
}

fn parse_classification(content: &str) -> Result<ClassificationResult, AIError> {
    let payload: ClassificationPayload = serde_json::from_str(content.trim())
        .map_err(|e| AIError::parse(format!("Failed to parse classification: {}", e)))?;

    Ok(ClassificationResult {
        domain: payload.category,
        rationale: payload.reasoning,
        origin: ResultOrigin::Model,
    })
}
