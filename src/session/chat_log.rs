// Append-only chat log for one chat screen visit

use super::message::{Message, MonotonicClock, Sender};

/// Ordered chat history. Nothing is ever evicted; the whole log is dropped
/// when the user leaves the chat screen.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    messages: Vec<Message>,
    clock: MonotonicClock,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message stamped with the session clock
    pub fn append_message(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        is_crisis: bool,
    ) -> &Message {
        let message = Message::new(text.into(), sender, is_crisis, self.clock.now());
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Add a user message to the log
    pub fn add_user_message(&mut self, text: impl Into<String>) -> &Message {
        self.append_message(Sender::User, text, false)
    }

    /// Add an agent reply to the log
    pub fn add_agent_message(&mut self, text: impl Into<String>, is_crisis: bool) -> &Message {
        self.append_message(Sender::Agent, text, is_crisis)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get total number of messages
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Get number of complete turns (user message followed by a reply)
    pub fn turn_count(&self) -> usize {
        self.messages
            .windows(2)
            .filter(|pair| pair[0].sender() == Sender::User && pair[1].sender() == Sender::Agent)
            .count()
    }
}
