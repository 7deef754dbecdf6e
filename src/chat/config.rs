//! Configuration types for the parley binary.
//!
//! [`Cli`] is the clap-derived command line; [`AssistantConfig`] is the
//! resolved configuration the binary builds its client and gateway from.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::client::DEFAULT_API_URL;
use crate::gateway::DEFAULT_MODEL;

/// Talk to a hosted chat model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about, long_about = None)]
pub struct Cli {
    /// Log requests and responses as JSON on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Model to use.  An empty value selects the default.
    #[arg(short, long, global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Disable ANSI colors and styles.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_API_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask a single question and print the answer.
    Ask {
        /// The question; words are joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Start an interactive conversation.
    Chat,

    /// List the available models.
    Models,
}

impl Command {
    /// The question of an `ask` invocation, words joined by single spaces.
    pub fn question(&self) -> Option<String> {
        match self {
            Command::Ask { question } => Some(question.join(" ")),
            _ => None,
        }
    }
}

/// Returns true for parse outcomes that are requests for help or version
/// output rather than usage errors.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Resolved configuration for an assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// The model answering questions.
    pub model: String,

    /// Base URL of the API.
    pub base_url: String,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl AssistantConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model.  An empty identifier keeps the default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.model = if model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model
        };
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Disables ANSI colors.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            use_color: true,
        }
    }
}

impl From<&Cli> for AssistantConfig {
    fn from(cli: &Cli) -> Self {
        let config = AssistantConfig::new()
            .with_model(cli.model.clone())
            .with_base_url(cli.base_url.clone());
        if cli.no_color {
            config.without_color()
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["parley", "ask", "What", "is", "2", "+", "2?"]).unwrap();
        assert_eq!(cli.command.question().as_deref(), Some("What is 2 + 2?"));
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert!(!cli.verbose);
    }

    #[test]
    fn ask_requires_a_question() {
        let err = Cli::try_parse_from(["parley", "ask"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(!is_informational(&err));
    }

    #[test]
    fn subcommand_is_required() {
        let err = Cli::try_parse_from(["parley"]).unwrap_err();
        assert!(!is_informational(&err));
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let err = Cli::try_parse_from(["parley", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(!is_informational(&err));
    }

    #[test]
    fn help_and_version_are_informational() {
        let err = Cli::try_parse_from(["parley", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(is_informational(&err));

        let err = Cli::try_parse_from(["parley", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(is_informational(&err));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["parley", "chat", "-v", "-m", "gpt-4o", "--no-color"])
            .unwrap();
        assert_eq!(cli.command, Command::Chat);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.model, "gpt-4o");
        assert_eq!(cli.command.question(), None);
    }

    #[test]
    fn models_subcommand() {
        let cli = Cli::try_parse_from(["parley", "--model", "gpt-4o", "models"]).unwrap();
        assert_eq!(cli.command, Command::Models);
    }

    #[test]
    fn config_from_cli() {
        let cli = Cli::try_parse_from([
            "parley",
            "--model",
            "",
            "--base-url",
            "http://localhost:11434/v1",
            "--no-color",
            "chat",
        ])
        .unwrap();
        let config = AssistantConfig::from(&cli);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder() {
        let config = AssistantConfig::new();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.use_color);

        let config = config.with_model("gpt-4o").without_color();
        assert_eq!(config.model, "gpt-4o");
        assert!(!config.use_color);
    }
}
