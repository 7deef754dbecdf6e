//! Core chat session management.
//!
//! A [`ChatSession`] pairs an [`Assistant`] with the conversation it is
//! holding, so the interactive loop never has to thread the log by hand.

use crate::chat::assistant::Assistant;
use crate::error::Result;
use crate::gateway::CompletionGateway;
use crate::types::Conversation;

/// An interactive session: an assistant plus its running conversation.
pub struct ChatSession<G: CompletionGateway> {
    assistant: Assistant<G>,
    conversation: Conversation,
}

impl<G: CompletionGateway> ChatSession<G> {
    /// Creates a session with an empty conversation.
    pub fn new(assistant: Assistant<G>) -> Self {
        Self {
            assistant,
            conversation: Conversation::new(),
        }
    }

    /// Sends a question and returns the answer.
    ///
    /// On failure the question stays in the conversation without an answer.
    pub async fn send(&mut self, question: &str) -> Result<String> {
        self.assistant
            .converse(&mut self.conversation, question)
            .await
    }

    /// Clears the conversation history.
    pub fn reset(&mut self) {
        self.conversation.reset();
    }

    /// Returns the number of turns in the conversation.
    pub fn message_count(&self) -> usize {
        self.conversation.len()
    }

    /// The conversation so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The model answering questions.
    pub fn model(&self) -> &str {
        self.assistant.model()
    }

    /// Every model the service offers, sorted.
    pub async fn models(&self) -> Result<Vec<String>> {
        self.assistant.models().await
    }

    /// The assistant backing this session.
    pub fn assistant(&self) -> &Assistant<G> {
        &self.assistant
    }
}
