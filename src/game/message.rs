//! Battle message log
//!
//! Actions and the battle loop append narrative here; the binary drains the
//! log and renders it.

/// A line of battle narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    /// Round header
    Round,
    /// What a combatant did
    Action,
    /// Health and block readouts
    Status,
    /// A combatant was knocked out
    Elimination,
    /// Start and end of the battle, worth reading aloud
    Announcement,
    /// Separators and setup chatter
    System,
}

/// Ordered buffer of battle messages
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<BattleMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the log
    pub fn add(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(BattleMessage {
            text: text.into(),
            category,
        });
    }

    pub fn action(&mut self, text: impl Into<String>) {
        self.add(text, MessageCategory::Action);
    }

    pub fn status(&mut self, text: impl Into<String>) {
        self.add(text, MessageCategory::Status);
    }

    /// Get all pending messages
    pub fn messages(&self) -> &[BattleMessage] {
        &self.messages
    }

    /// Take all pending messages, leaving the log empty
    pub fn drain(&mut self) -> Vec<BattleMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether any pending message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }
}
