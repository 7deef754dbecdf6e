use serde::{Deserialize, Serialize};

use crate::types::Turn;

/// Body of a `POST chat/completions` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Identifier of the model that should answer.
    pub model: String,

    /// The turns sent as context, oldest first.
    pub messages: Vec<Turn>,

    /// Sampling temperature.
    pub temperature: f32,

    /// Number of completion candidates to generate.
    pub n: u32,
}

impl ChatCompletionRequest {
    /// Create a new request.
    pub fn new(model: impl Into<String>, messages: Vec<Turn>, temperature: f32, n: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature,
            n,
        }
    }
}

/// Body of a successful `POST chat/completions` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Server-assigned completion ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The model that actually produced the completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// The completion candidates.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// The text of the first choice, if the response has any choices.
    ///
    /// A choice whose message carries no content yields an empty string.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or(""))
    }
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Position of this candidate in the response.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: ChoiceMessage,

    /// Why generation stopped, e.g. `"stop"` or `"length"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The message inside a [`Choice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Role reported by the server; normally `"assistant"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Generated text.  The API sends `null` for non-text completions.
    #[serde(default)]
    pub content: Option<String>,
}
