use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Information about a specific model.
///
/// Returned by `GET models/{id}` and as the entries of `GET models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Unique model identifier.
    pub id: String,

    /// Object type.
    ///
    /// For models, this is always `"model"`.
    #[serde(default)]
    pub object: ModelObject,

    /// Time at which the model was created, sent as unix seconds.
    ///
    /// Some OpenAI-compatible servers omit this field.
    #[serde(
        default,
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<OffsetDateTime>,

    /// The organization that owns the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

impl ModelInfo {
    /// Create a model entry with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: ModelObject::Model,
            created: None,
            owned_by: None,
        }
    }
}

/// Type of the model object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelObject {
    /// Model type
    #[default]
    Model,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_model_info_serialization() {
        let model_info = ModelInfo {
            id: "gpt-4o-mini".to_string(),
            object: ModelObject::Model,
            created: Some(datetime!(2024-07-18 0:00:00 UTC)),
            owned_by: Some("system".to_string()),
        };

        let json = serde_json::to_value(&model_info).unwrap();
        let expected = serde_json::json!({
            "id": "gpt-4o-mini",
            "object": "model",
            "created": 1721260800,
            "owned_by": "system"
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn test_model_info_deserialization() {
        let json = serde_json::json!({
            "id": "gpt-4o-mini",
            "object": "model",
            "created": 1721260800,
            "owned_by": "system"
        });
        let model_info: ModelInfo = serde_json::from_value(json).unwrap();

        assert_eq!(model_info.id, "gpt-4o-mini");
        assert_eq!(model_info.created, Some(datetime!(2024-07-18 0:00:00 UTC)));
        assert_eq!(model_info.owned_by.as_deref(), Some("system"));
        assert_eq!(model_info.object, ModelObject::Model);
    }

    #[test]
    fn test_model_info_minimal() {
        let model_info: ModelInfo =
            serde_json::from_value(serde_json::json!({"id": "llama3"})).unwrap();
        assert_eq!(model_info, ModelInfo::new("llama3"));
    }
}
