//! Chat session
//!
//! The message history shown in the main view together with the chat
//! configuration it runs under.

use crate::storage::chat_config::ChatConfiguration;
use crate::types::message::{Message, Role};

pub const GREETING: &str = "Hello, there. What can I do for you today?";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    configuration: ChatConfiguration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatConfiguration::default())
    }
}

impl ChatSession {
    /// Start a session that opens with the assistant greeting
    pub fn new(configuration: ChatConfiguration) -> Self {
        Self {
            messages: vec![Message::new(Role::Assistant, GREETING)],
            configuration,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn configuration(&self) -> &ChatConfiguration {
        &self.configuration
    }

    pub fn set_configuration(&mut self, configuration: ChatConfiguration) {
        self.configuration = configuration;
    }

    /// Append the user's message. Blank input is ignored.
    ///
    /// No request is sent to the server yet; the message is only added to
    /// the history.
    pub fn submit(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::new(Role::User, text));
        tracing::debug!(
            "Queued user message ({} chars); no inference backend connected",
            text.len()
        );
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_opens_with_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_submit_appends_user_message() {
        let mut session = ChatSession::default();
        let msg = session.submit("What's the weather?").cloned().unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "What's the weather?");
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_submit_ignores_blank_input() {
        let mut session = ChatSession::default();
        assert!(session.submit("   \n").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_set_configuration() {
        let mut session = ChatSession::default();
        let config = ChatConfiguration::builder().temp(0.1).build().unwrap();
        session.set_configuration(config.clone());
        assert_eq!(session.configuration(), &config);
    }
}
