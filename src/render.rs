//! Terminal output for parley.
//!
//! Every line the user sees is tagged with who is speaking: `[System]` for
//! the client itself, `[AI]` for model output, and `[Error]` for failures.
//! The [`Renderer`] trait lets the chat loop run against something other
//! than a real terminal.

use std::io::{self, Stdout, Write};

use termimad::MadSkin;

use crate::loading::LoadingIndicator;

/// ANSI escape code for bright blue text (used for system messages).
pub const ANSI_BRIGHT_BLUE: &str = "\x1b[94m";

/// ANSI escape code for yellow text (used for model output).
pub const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for red text (used for errors).
pub const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Carriage return followed by erase-to-end-of-line.
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// Prefix for client messages.
pub const PREFIX_SYSTEM: &str = "[System] ";

/// Prefix for model output.
pub const PREFIX_AI: &str = "[AI] ";

/// Prefix for errors.
pub const PREFIX_ERROR: &str = "[Error] ";

/// Prompt shown when waiting for user input.
pub const PROMPT: &str = "[You] ";

/// Column at which rendered markdown is wrapped.
const MARKDOWN_WIDTH: usize = 100;

/// Trait for rendering chat output.
pub trait Renderer: Send {
    /// Print a message from the client itself.
    fn print_system(&mut self, message: &str);

    /// Print model output.
    fn print_ai(&mut self, message: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Start an animated indicator while waiting on the model.
    fn start_loading(&mut self, message: &str) -> LoadingIndicator;
}

/// Renderer writing to the process's standard streams.
///
/// Errors go to stderr; everything else to stdout.  Multi-line model output
/// is laid out as markdown; without color the layout is kept but styling
/// is dropped.
pub struct TerminalRenderer {
    stdout: Stdout,
    use_color: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Creates a new TerminalRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new TerminalRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            skin: markdown_skin(use_color),
        }
    }

    fn print_tagged(&mut self, color: &str, prefix: &str, message: &str) {
        if self.use_color {
            let _ = writeln!(self.stdout, "{color}{prefix}{message}{ANSI_RESET}");
        } else {
            let _ = writeln!(self.stdout, "{prefix}{message}");
        }
        let _ = self.stdout.flush();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn print_system(&mut self, message: &str) {
        self.print_tagged(ANSI_BRIGHT_BLUE, PREFIX_SYSTEM, message);
    }

    fn print_ai(&mut self, message: &str) {
        if message.contains('\n') {
            let rendered = render_markdown(&self.skin, message);
            self.print_tagged(ANSI_YELLOW, PREFIX_AI, &rendered);
        } else {
            self.print_tagged(ANSI_YELLOW, PREFIX_AI, message);
        }
    }

    fn print_error(&mut self, error: &str) {
        let _ = self.stdout.flush();
        if self.use_color {
            eprintln!("{ANSI_RED}{PREFIX_ERROR}{error}{ANSI_RESET}");
        } else {
            eprintln!("{PREFIX_ERROR}{error}");
        }
    }

    fn start_loading(&mut self, message: &str) -> LoadingIndicator {
        LoadingIndicator::start(message, io::stdout(), self.use_color)
    }
}

/// The markdown skin for a color setting.  Without color the skin carries
/// no styles, so rendering emits no escape codes.
pub fn markdown_skin(use_color: bool) -> MadSkin {
    if use_color {
        MadSkin::default()
    } else {
        MadSkin::no_style()
    }
}

/// Render markdown for the terminal, without leading or trailing newlines.
pub fn render_markdown(skin: &MadSkin, markdown: &str) -> String {
    skin.text(markdown, Some(MARKDOWN_WIDTH))
        .to_string()
        .trim_matches('\n')
        .to_string()
}

/// One `* <id>` bullet per model, in the order given.
pub fn format_model_list(models: &[String]) -> String {
    models
        .iter()
        .map(|model| format!("* {model}"))
        .collect::<Vec<_>>()
        .join("\n")
}
