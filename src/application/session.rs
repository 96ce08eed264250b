//! ChatSession - Session controller for the two-phase dispatch workflow.
//!
//! Owns the conversation store and the per-request workflow sequence, and
//! drives classify → delegate → respond for each submission. Exactly one
//! request is in flight at a time; submissions arriving while busy are
//! rejected without touching any state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::conversation::{ConversationStore, Message};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::workflow::{RequestWorkflow, WorkflowStep};
use crate::ports::AIProvider;

use super::classifier::{ClassificationResult, Classifier};
use super::dispatcher::{WorkerAnswer, WorkerDispatcher};

/// How long a finished workflow sequence stays visible before it is
/// cleared.
const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(5);

/// Generic reply appended when a request fails outright.
const ERROR_REPLY: &str =
    "I encountered an error while consulting the library. Please try again.";

/// Note shown on a step aborted by an uncaught failure.
const FAILED_NOTE: &str = "Failed to process request.";

/// Outcome of a submission, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request ran to completion and an answer was appended.
    Completed,
    /// The request failed outright; a generic error reply was appended.
    Failed,
    /// A request was already in flight; nothing changed.
    RejectedBusy,
    /// The question was blank; nothing changed.
    IgnoredBlank,
}

/// Session controller owning conversation and workflow state.
///
/// Shared by reference with the delivery layer; all mutation goes through
/// [`ChatSession::submit`].
pub struct ChatSession {
    id: SessionId,
    classifier: Classifier,
    dispatcher: WorkerDispatcher,
    store: Arc<Mutex<ConversationStore>>,
    workflow: Arc<Mutex<RequestWorkflow>>,
    in_flight: AtomicBool,
    reset_task: Mutex<Option<JoinHandle<()>>>,
    reset_delay: Duration,
}

impl ChatSession {
    /// Creates a session backed by the given provider.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self::with_reset_delay(provider, DEFAULT_RESET_DELAY)
    }

    /// Creates a session with a custom workflow reset delay.
    pub fn with_reset_delay(provider: Arc<dyn AIProvider>, reset_delay: Duration) -> Self {
        Self {
            id: SessionId::new(),
            classifier: Classifier::new(Arc::clone(&provider)),
            dispatcher: WorkerDispatcher::new(provider),
            store: Arc::new(Mutex::new(ConversationStore::new())),
            workflow: Arc::new(Mutex::new(RequestWorkflow::new())),
            in_flight: AtomicBool::new(false),
            reset_task: Mutex::new(None),
            reset_delay,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns true if a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Returns an ordered snapshot of the conversation.
    pub fn messages(&self) -> Vec<Message> {
        self.store.lock().unwrap().messages().to_vec()
    }

    /// Returns a snapshot of the current workflow steps.
    pub fn workflow_steps(&self) -> Vec<WorkflowStep> {
        self.workflow.lock().unwrap().snapshot()
    }

    /// Submits a question and drives it through classification and answer
    /// generation.
    ///
    /// No-op if the question is blank or another request is in flight. The
    /// call resolves when the request has run to completion (answer,
    /// internal fallback, or caught failure); the workflow display reset is
    /// scheduled, not awaited.
    pub async fn submit(&self, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::IgnoredBlank;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SubmitOutcome::RejectedBusy;
        }

        let outcome = self.run_request(question.to_string()).await;

        self.schedule_reset();
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn run_request(&self, question: String) -> SubmitOutcome {
        self.cancel_pending_reset();

        let user_message = match Message::user(question.clone()) {
            Ok(message) => message,
            Err(_) => return SubmitOutcome::IgnoredBlank,
        };
        self.store.lock().unwrap().append(user_message);

        let begun = {
            let mut workflow = self.workflow.lock().unwrap();
            // A finished sequence may still be on display from the
            // previous request.
            workflow.clear();
            workflow.begin_routing("Analyzing query category...")
        };
        if let Err(err) = begun {
            error!(session_id = %self.id, error = %err, "could not start workflow");
            return self.record_failure();
        }

        // The two model calls run in their own task so that a panic
        // escaping both clients is caught at the join point instead of
        // unwinding through the session.
        let classifier = self.classifier.clone();
        let dispatcher = self.dispatcher.clone();
        let workflow = Arc::clone(&self.workflow);
        let task_question = question.clone();

        let handle = tokio::spawn(async move {
            let classification = classifier.classify(&task_question).await;

            {
                let mut workflow = workflow.lock().unwrap();
                workflow.complete_routing(format!(
                    "Classified as {}",
                    classification.domain.wire_name()
                ))?;
                workflow.begin_delegation(format!(
                    "Domain expert '{}' is crafting your answer...",
                    classification.domain.wire_name()
                ))?;
            }

            let answer = dispatcher
                .answer(classification.domain, &task_question)
                .await;

            workflow
                .lock()
                .unwrap()
                .complete_delegation("Response generated successfully.")?;

            Ok::<(ClassificationResult, WorkerAnswer), DomainError>((classification, answer))
        });

        match handle.await {
            Ok(Ok((classification, answer))) => {
                let fallback = answer.origin.is_fallback();
                match Message::assistant(answer.content, classification.domain) {
                    Ok(message) => {
                        self.store.lock().unwrap().append(message);
                        info!(
                            session_id = %self.id,
                            domain = %classification.domain.wire_name(),
                            classification_fallback = classification.origin.is_fallback(),
                            answer_fallback = fallback,
                            "request completed"
                        );
                        SubmitOutcome::Completed
                    }
                    Err(err) => {
                        error!(session_id = %self.id, error = %err, "answer message rejected");
                        self.record_failure()
                    }
                }
            }
            Ok(Err(err)) => {
                error!(session_id = %self.id, error = %err, "workflow transition failed");
                self.record_failure()
            }
            Err(join_err) => {
                error!(
                    session_id = %self.id,
                    panicked = join_err.is_panic(),
                    "request task failed"
                );
                self.record_failure()
            }
        }
    }

    /// Marks the active step failed and appends the generic error reply.
    fn record_failure(&self) -> SubmitOutcome {
        self.workflow.lock().unwrap().fail_active(FAILED_NOTE);
        if let Ok(message) = Message::assistant_untagged(ERROR_REPLY) {
            self.store.lock().unwrap().append(message);
        }
        SubmitOutcome::Failed
    }

    /// Schedules the workflow display to clear after the reset delay.
    ///
    /// The task is stored so the next submission can abort it before it
    /// races ahead of a fresh request.
    fn schedule_reset(&self) {
        let workflow = Arc::clone(&self.workflow);
        let delay = self.reset_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            workflow.lock().unwrap().clear();
        });

        if let Some(previous) = self.reset_task.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }

    fn cancel_pending_reset(&self) {
        if let Some(handle) = self.reset_task.lock().unwrap().take() {
            handle.abort();
        }
    }
}
