use serde::{Deserialize, Serialize};

use crate::types::ModelInfo;

/// Response from the list models API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelListResponse {
    /// List of models returned by the API.
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

impl ModelListResponse {
    /// Create a new `ModelListResponse`.
    pub fn new(data: Vec<ModelInfo>) -> Self {
        Self { data }
    }

    /// Get the list of models.
    pub fn models(&self) -> &[ModelInfo] {
        &self.data
    }

    /// Identifiers of every model, in the order the server sent them.
    pub fn ids(&self) -> Vec<String> {
        self.data.iter().map(|model| model.id.clone()).collect()
    }
}
