//! Question answering on top of a [`CompletionGateway`].

use crate::error::{Error, Result};
use crate::gateway::CompletionGateway;
use crate::types::{Conversation, Role};

/// Orchestrates questions and conversation turns against a gateway.
///
/// Construction validates the configured model exactly once; an `Assistant`
/// therefore always refers to a model the service accepted.
pub struct Assistant<G: CompletionGateway> {
    gateway: G,
}

impl<G: CompletionGateway> Assistant<G> {
    /// Create an assistant, validating the gateway's model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelNotFound`] if the model does not exist, or the
    /// gateway error raised while checking.
    pub async fn new(gateway: G) -> Result<Self> {
        gateway.validate_model().await?;
        Ok(Self { gateway })
    }

    /// The model answering questions.
    pub fn model(&self) -> &str {
        self.gateway.model()
    }

    /// Every model the service offers, sorted.
    pub async fn models(&self) -> Result<Vec<String>> {
        self.gateway.list_models().await
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Answer a single question with no prior context.
    ///
    /// The question is sent in a throwaway conversation, so no caller-held
    /// log is affected.
    pub async fn ask(&self, question: &str) -> Result<String> {
        ensure_question(question)?;
        let conversation = Conversation::with_question(question);
        self.gateway.complete(&conversation).await
    }

    /// Advance `conversation` by one question and its answer.
    ///
    /// The user turn is appended before the remote call.  The assistant turn
    /// is appended only when the call succeeds, so after a failure the log
    /// ends with the unanswered question.
    pub async fn converse(
        &self,
        conversation: &mut Conversation,
        question: &str,
    ) -> Result<String> {
        ensure_question(question)?;
        conversation.append(Role::User, question);

        let answer = self.gateway.complete(conversation).await?;
        conversation.append(Role::Assistant, answer.clone());
        Ok(answer)
    }
}

fn ensure_question(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        Err(Error::empty_input())
    } else {
        Ok(())
    }
}
