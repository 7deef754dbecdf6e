//! Meta-command parsing for the chat loop.
//!
//! A handful of bare words control the session instead of being sent to the
//! model.  Matching is exact and case-sensitive after trimming, so
//! `Model` or `reset please` are ordinary questions.

/// Printed when the chat loop ends.
pub const MESSAGE_GOODBYE: &str = "Goodbye!";

/// Printed after the conversation is cleared.
pub const MESSAGE_RESET: &str = "The chat has been reset.";

/// Text of the loading indicator.
pub const MESSAGE_LOADING: &str = "Thinking";

/// A parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// Show the current model.
    Model,

    /// List the available models.
    Models,

    /// Clear the conversation history.
    Reset,

    /// Leave the chat.
    Exit,
}

impl ChatCommand {
    /// Every command, in the order the welcome banner lists them.
    pub const ALL: [ChatCommand; 4] = [
        ChatCommand::Model,
        ChatCommand::Models,
        ChatCommand::Reset,
        ChatCommand::Exit,
    ];

    /// The word that triggers this command.
    pub fn keyword(self) -> &'static str {
        match self {
            ChatCommand::Model => "model",
            ChatCommand::Models => "models",
            ChatCommand::Reset => "reset",
            ChatCommand::Exit => "exit",
        }
    }
}

/// Parse a line of input as a command.
///
/// Returns `None` for anything that should be sent to the model.
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();
    ChatCommand::ALL
        .into_iter()
        .find(|command| command.keyword() == input)
}

/// The banner printed when the chat starts.
pub fn welcome_text(model: &str) -> String {
    format!(
        "Welcome to the dialog with ChatGPT ({model})!\n\
         1. Type 'model' to get current model.\n\
         2. Type 'models' to list models.\n\
         3. Type 'reset' to reset the chat.\n\
         4. Type 'exit' or cmd+C to stop."
    )
}
