//! Message entity for conversations.
//!
//! Messages are immutable records of user/assistant exchanges. Assistant
//! messages that came from a successful worker call carry the answer domain
//! that produced them.

use crate::domain::foundation::{DomainError, MessageId, Timestamp};
use crate::domain::taxonomy::AnswerDomain;
use serde::{Deserialize, Serialize};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// User input.
    User,
    /// AI assistant response.
    Assistant,
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is non-empty (validated at construction)
/// - `expert` is present only on assistant messages
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The role of the message sender.
    role: Role,

    /// The content of the message.
    content: String,

    /// The answer domain that produced this message, for assistant
    /// messages generated by a worker call.
    expert: Option<AnswerDomain>,

    /// When the message was created.
    created_at: Timestamp,
}

impl Message {
    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn user(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::User, content, None)
    }

    /// Creates an assistant message tagged with the answer domain that
    /// produced it.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn assistant(
        content: impl Into<String>,
        expert: AnswerDomain,
    ) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content, Some(expert))
    }

    /// Creates an untagged assistant message (used for the generic error
    /// reply when a request fails outright).
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn assistant_untagged(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content, None)
    }

    fn new(
        role: Role,
        content: impl Into<String>,
        expert: Option<AnswerDomain>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                "content",
                "Message content cannot be empty",
            ));
        }

        Ok(Self {
            id: MessageId::new(),
            role,
            content,
            expert,
            created_at: Timestamp::now(),
        })
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the answer domain that produced this message, if any.
    pub fn expert(&self) -> Option<AnswerDomain> {
        self.expert
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this message is from the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}
