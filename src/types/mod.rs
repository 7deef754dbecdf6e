// Public modules
pub mod chat_completion;
pub mod conversation;
pub mod model_info;
pub mod model_list_response;
pub mod role;
pub mod turn;

// Re-exports
pub use chat_completion::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage};
pub use conversation::Conversation;
pub use model_info::{ModelInfo, ModelObject};
pub use model_list_response::ModelListResponse;
pub use role::Role;
pub use turn::Turn;
