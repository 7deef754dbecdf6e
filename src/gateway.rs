//! The remote completion gateway.
//!
//! [`CompletionGateway`] is the narrow capability the rest of the crate needs
//! from a chat completion service: the configured model, a completion call, a
//! model existence check, and a model listing.  [`OpenAiGateway`] implements
//! it over the [`OpenAi`] HTTP client.

use tracing::debug;

use crate::client::OpenAi;
use crate::error::{Error, Result};
use crate::types::{ChatCompletionRequest, Conversation, Turn};

/// Model used when none is configured.  It is assumed to always exist.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// The largest number of turns sent upstream in one request.
pub const MAX_TURNS: usize = 20;

/// Sampling temperature used for every completion.
pub const TEMPERATURE: f32 = 0.7;

/// Capability interface over a remote chat completion service.
#[async_trait::async_trait]
pub trait CompletionGateway: Send + Sync {
    /// The configured model identifier.
    fn model(&self) -> &str;

    /// Complete the conversation and return the first choice's text.
    ///
    /// Only the most recent [`MAX_TURNS`] turns are sent.
    async fn complete(&self, conversation: &Conversation) -> Result<String>;

    /// Returns true if the configured model exists upstream.
    async fn model_exists(&self) -> Result<bool>;

    /// Every model identifier known upstream, sorted and without duplicates.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Fail with [`Error::ModelNotFound`] unless the configured model exists.
    async fn validate_model(&self) -> Result<()> {
        if self.model_exists().await? {
            Ok(())
        } else {
            Err(Error::model_not_found(self.model()))
        }
    }
}

/// [`CompletionGateway`] backed by an OpenAI-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiGateway {
    client: OpenAi,
    model: String,
}

impl OpenAiGateway {
    /// Create a gateway for the default model.
    pub fn new(client: OpenAi) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Select a model.  An empty identifier keeps the current one.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.is_empty() {
            self.model = model;
        }
        self
    }

    /// Build the request body for a conversation.
    pub fn build_request(&self, conversation: &Conversation) -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            self.model.clone(),
            recent_turns(conversation).to_vec(),
            TEMPERATURE,
            1,
        )
    }
}

#[async_trait::async_trait]
impl CompletionGateway for OpenAiGateway {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, conversation: &Conversation) -> Result<String> {
        let request = self.build_request(conversation);
        debug!(
            model = %request.model,
            turns = request.messages.len(),
            request = ?request,
            "chat completion request"
        );

        let response = self.client.create_chat_completion(&request).await?;
        debug!(response = ?response, "chat completion response");

        response
            .first_content()
            .map(String::from)
            .ok_or_else(Error::empty_response)
    }

    async fn model_exists(&self) -> Result<bool> {
        if self.model == DEFAULT_MODEL {
            return Ok(true);
        }

        let info = self.client.get_model(&self.model).await?;
        debug!(model = ?info, "model lookup");
        Ok(info.id == self.model)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self.client.list_models().await?;
        debug!(count = response.models().len(), "model listing");

        let models = sorted_unique(response.ids());
        debug!(models = ?models, "models");
        Ok(models)
    }
}

/// The trailing window of at most [`MAX_TURNS`] turns.
fn recent_turns(conversation: &Conversation) -> &[Turn] {
    let turns = conversation.snapshot();
    &turns[turns.len().saturating_sub(MAX_TURNS)..]
}

fn sorted_unique(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids.dedup();
    ids
}
