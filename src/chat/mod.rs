//! Chat application module for talking to a hosted model.
//!
//! This module provides the pieces behind the `parley` binary:
//!
//! - [`assistant`]: one-off questions and conversation turns
//! - [`session`]: an assistant bundled with its running conversation
//! - [`commands`]: the `model`, `models`, `reset` and `exit` meta-commands
//! - [`repl`]: line-by-line dispatch for the interactive loop
//! - [`config`]: CLI argument parsing and resolved configuration

pub mod assistant;
pub mod commands;
pub mod config;
pub mod repl;
pub mod session;

pub use crate::render::{Renderer, TerminalRenderer};
pub use assistant::Assistant;
pub use commands::{
    ChatCommand, MESSAGE_GOODBYE, MESSAGE_LOADING, MESSAGE_RESET, parse_command, welcome_text,
};
pub use config::{AssistantConfig, Cli, Command, is_informational};
pub use repl::Repl;
pub use session::ChatSession;
