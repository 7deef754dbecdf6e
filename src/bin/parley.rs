//! Command-line client for OpenAI-compatible chat models.
//!
//! # Usage
//!
//! ```bash
//! # Ask a single question
//! parley ask What is the capital of Portugal?
//!
//! # Start a conversation with a specific model
//! parley chat --model gpt-4o
//!
//! # List the models the API offers
//! parley models
//!
//! # Log requests and responses as JSON on stderr
//! parley -v ask Hello
//! ```
//!
//! # Commands
//!
//! While chatting, these words are handled locally:
//! - `model` - Show the current model
//! - `models` - List the available models
//! - `reset` - Clear the conversation
//! - `exit` - Leave the chat (Ctrl-C and Ctrl-D work too)

use std::ops::ControlFlow;
use std::process::ExitCode;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use parley::chat::{
    Assistant, AssistantConfig, ChatSession, Cli, Command, Repl, is_informational,
};
use parley::render::{PROMPT, Renderer, TerminalRenderer, format_model_list};
use parley::{Error, OpenAi, OpenAiGateway, Result, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
    logging::init_logging(cli.verbose);
    let config = AssistantConfig::from(&cli);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            TerminalRenderer::with_color(config.use_color).print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &AssistantConfig) -> Result<()> {
    let client = OpenAi::with_options(None, Some(config.base_url.clone()))?;
    let gateway = OpenAiGateway::new(client).with_model(config.model.clone());
    let assistant = Assistant::new(gateway).await?;
    let mut renderer = TerminalRenderer::with_color(config.use_color);

    match &command {
        Command::Ask { .. } => {
            let question = command.question().unwrap_or_default();
            let answer = assistant.ask(&question).await?;
            renderer.print_ai(&answer);
        }
        Command::Models => {
            let models = assistant.models().await?;
            renderer.print_ai(&format_model_list(&models));
        }
        Command::Chat => {
            let repl = Repl::new(ChatSession::new(assistant), renderer);
            chat(repl).await?;
        }
    }
    Ok(())
}

async fn chat(mut repl: Repl<OpenAiGateway, TerminalRenderer>) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(readline_error)?;
    repl.welcome();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }
                if let ControlFlow::Break(()) = repl.handle_line(&line).await? {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                repl.goodbye();
                return Ok(());
            }
            Err(err) => return Err(readline_error(err)),
        }
    }
}

fn readline_error(err: ReadlineError) -> Error {
    match err {
        ReadlineError::Io(err) => Error::io("Input error", err),
        other => Error::io(
            format!("Input error: {other}"),
            std::io::Error::other(other.to_string()),
        ),
    }
}
