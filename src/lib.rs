// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod gateway;
pub mod loading;
pub mod logging;
pub mod render;
pub mod types;

// Re-exports
pub use client::OpenAi;
pub use error::{Error, Result};
pub use gateway::{CompletionGateway, DEFAULT_MODEL, OpenAiGateway};
pub use types::*;
