//! Chat log entries.

use chrono::{DateTime, Local};

use crate::assistant::IntentCategory;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Typed or dictated by the user.
    User,
    /// Produced by the keyword assistant.
    Assistant,
}

/// One immutable entry of the conversation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Monotonic per session, starting at 1.
    pub id: u64,
    /// Author.
    pub role: Role,
    /// Message text as displayed.
    pub body: String,
    /// Local time the message was appended.
    pub created_at: DateTime<Local>,
    /// Category the reply was routed through (assistant messages only).
    pub category: Option<IntentCategory>,
}

impl ChatMessage {
    /// `HH:MM` label shown beside the message.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}
