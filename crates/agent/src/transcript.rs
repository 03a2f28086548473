//! Conversation Transcript
//!
//! Append-only message history for one session, plus the exchanged-message
//! counter. Messages are never mutated or removed individually; the only
//! destructive operation replaces the whole history with a fresh welcome.

use solarbot_core::ChatMessage;

/// Append-only conversation history
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    /// Messages exchanged since the session (or last clear) began.
    /// Seeded welcome messages do not count.
    exchanged: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, advancing the exchanged-message counter
    pub fn push(&mut self, message: ChatMessage) {
        self.exchanged += 1;
        self.messages.push(message);
    }

    /// Append a user message stamped now
    pub fn add_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    /// Append an assistant message stamped now
    pub fn add_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::assistant(content));
    }

    /// Replace everything with a single seeded welcome message.
    ///
    /// The welcome is not an exchanged message, so the counter restarts
    /// at zero.
    pub fn clear_and_seed(&mut self, welcome: impl Into<String>) {
        self.messages.clear();
        self.exchanged = 0;
        self.messages.push(ChatMessage::assistant(welcome));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Exchanged-message counter (welcome seeding excluded)
    pub fn exchanged(&self) -> u64 {
        self.exchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarbot_core::ChatRole;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.add_user("first");
        transcript.add_assistant("second");
        transcript.add_user("third");

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_eq!(transcript.exchanged(), 3);
    }

    #[test]
    fn test_counter_counts_both_roles() {
        let mut transcript = Transcript::new();
        transcript.add_user("hi");
        transcript.add_assistant("hello");
        assert_eq!(transcript.exchanged(), 2);
    }

    #[test]
    fn test_clear_and_seed() {
        let mut transcript = Transcript::new();
        transcript.add_user("hi");
        transcript.add_assistant("hello");

        transcript.clear_and_seed("welcome back");

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.exchanged(), 0);
        let welcome = transcript.last().unwrap();
        assert_eq!(welcome.role, ChatRole::Assistant);
        assert_eq!(welcome.content, "welcome back");
    }

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.exchanged(), 0);
        assert!(transcript.last().is_none());
    }
}
