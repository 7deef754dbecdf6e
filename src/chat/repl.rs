//! The interactive chat loop, one input line at a time.
//!
//! Reading lines is left to the caller (the binary uses rustyline), which
//! keeps [`Repl`] testable with a recording renderer and a scripted gateway.

use std::ops::ControlFlow;

use crate::chat::commands::{
    ChatCommand, MESSAGE_GOODBYE, MESSAGE_LOADING, MESSAGE_RESET, parse_command, welcome_text,
};
use crate::chat::session::ChatSession;
use crate::error::Result;
use crate::gateway::CompletionGateway;
use crate::render::{Renderer, format_model_list};

/// Dispatches input lines to meta-commands or the model.
pub struct Repl<G: CompletionGateway, R: Renderer> {
    session: ChatSession<G>,
    renderer: R,
}

impl<G: CompletionGateway, R: Renderer> Repl<G, R> {
    pub fn new(session: ChatSession<G>, renderer: R) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &ChatSession<G> {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Print the banner listing the commands and the active model.
    pub fn welcome(&mut self) {
        let text = welcome_text(self.session.model());
        self.renderer.print_system(&text);
    }

    /// Print the farewell message.
    pub fn goodbye(&mut self) {
        self.renderer.print_system(MESSAGE_GOODBYE);
    }

    /// Handle one line of input.
    ///
    /// Returns `Break` when the user asked to leave.  Blank lines are
    /// ignored; errors end the loop and are returned to the caller.
    pub async fn handle_line(&mut self, line: &str) -> Result<ControlFlow<()>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        match parse_command(line) {
            Some(ChatCommand::Model) => {
                let model = self.session.model().to_string();
                self.renderer.print_ai(&model);
            }
            Some(ChatCommand::Models) => {
                let models = self.session.models().await?;
                self.renderer.print_ai(&format_model_list(&models));
            }
            Some(ChatCommand::Reset) => {
                self.session.reset();
                self.renderer.print_system(MESSAGE_RESET);
            }
            Some(ChatCommand::Exit) => {
                self.goodbye();
                return Ok(ControlFlow::Break(()));
            }
            None => {
                let loading = self.renderer.start_loading(MESSAGE_LOADING);
                let result = self.session.send(line).await;
                loading.stop().await;

                let answer = result?;
                self.renderer.print_ai(&answer);
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::chat::assistant::Assistant;
    use crate::chat::assistant::tests::ScriptedGateway;
    use crate::error::Error;
    use crate::loading::LoadingIndicator;
    use crate::types::Turn;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Output {
        System(String),
        Ai(String),
        Error(String),
        Loading(String),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        output: Vec<Output>,
    }

    impl Renderer for RecordingRenderer {
        fn print_system(&mut self, message: &str) {
            self.output.push(Output::System(message.to_string()));
        }

        fn print_ai(&mut self, message: &str) {
            self.output.push(Output::Ai(message.to_string()));
        }

        fn print_error(&mut self, error: &str) {
            self.output.push(Output::Error(error.to_string()));
        }

        fn start_loading(&mut self, message: &str) -> LoadingIndicator {
            self.output.push(Output::Loading(message.to_string()));
            LoadingIndicator::start(message, io::sink(), false)
        }
    }

    async fn repl(gateway: ScriptedGateway) -> Repl<ScriptedGateway, RecordingRenderer> {
        let assistant = Assistant::new(gateway).await.unwrap();
        Repl::new(ChatSession::new(assistant), RecordingRenderer::default())
    }

    fn output<G: CompletionGateway>(repl: &Repl<G, RecordingRenderer>) -> &[Output] {
        &repl.renderer().output
    }

    #[tokio::test]
    async fn welcome_names_the_model() {
        let mut repl = repl(ScriptedGateway::new("gpt-4o")).await;
        repl.welcome();
        match &output(&repl)[0] {
            Output::System(text) => assert!(text.contains("(gpt-4o)")),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn question_shows_loading_then_answer() {
        let gateway = ScriptedGateway::new("test-model").answer(Ok("Hi there!".to_string()));
        let mut repl = repl(gateway).await;

        let flow = repl.handle_line("  Hello \n").await.unwrap();

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(
            output(&repl),
            &[
                Output::Loading("Thinking".to_string()),
                Output::Ai("Hi there!".to_string()),
            ]
        );
        assert_eq!(
            repl.session().conversation().snapshot(),
            &[Turn::user("Hello"), Turn::assistant("Hi there!")]
        );
    }

    #[tokio::test]
    async fn blank_lines_are_ignored() {
        let mut repl = repl(ScriptedGateway::new("test-model")).await;
        for line in ["", "   ", "\t\n"] {
            assert_eq!(
                repl.handle_line(line).await.unwrap(),
                ControlFlow::Continue(())
            );
        }
        assert!(output(&repl).is_empty());
        assert!(repl.session().assistant().gateway().requests().is_empty());
    }

    #[tokio::test]
    async fn model_command_makes_no_remote_call() {
        let mut repl = repl(ScriptedGateway::new("test-model")).await;
        assert_eq!(
            repl.handle_line("model").await.unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(output(&repl), &[Output::Ai("test-model".to_string())]);
        assert!(repl.session().assistant().gateway().requests().is_empty());
    }

    #[tokio::test]
    async fn models_command_prints_bullets() {
        let gateway = ScriptedGateway::new("test-model")
            .with_models(Ok(vec!["model1".to_string(), "model2".to_string()]));
        let mut repl = repl(gateway).await;
        assert_eq!(
            repl.handle_line("models").await.unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(
            output(&repl),
            &[Output::Ai("* model1\n* model2".to_string())]
        );
    }

    #[tokio::test]
    async fn models_failure_ends_the_loop() {
        let gateway = ScriptedGateway::new("test-model")
            .with_models(Err(Error::authentication("invalid key")));
        let mut repl = repl(gateway).await;
        let err = repl.handle_line("models").await.unwrap_err();
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn reset_clears_the_conversation() {
        let gateway = ScriptedGateway::new("test-model").answer(Ok("Hi there!".to_string()));
        let mut repl = repl(gateway).await;
        assert_eq!(
            repl.handle_line("Hello").await.unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(
            repl.handle_line("reset").await.unwrap(),
            ControlFlow::Continue(())
        );

        assert_eq!(repl.session().message_count(), 0);
        assert_eq!(
            output(&repl).last(),
            Some(&Output::System("The chat has been reset.".to_string()))
        );
    }

    #[tokio::test]
    async fn exit_breaks_the_loop() {
        let mut repl = repl(ScriptedGateway::new("test-model")).await;
        assert_eq!(
            repl.handle_line(" exit ").await.unwrap(),
            ControlFlow::Break(())
        );
        assert_eq!(output(&repl), &[Output::System("Goodbye!".to_string())]);
    }

    #[tokio::test]
    async fn commands_are_case_sensitive() {
        let gateway = ScriptedGateway::new("test-model").answer(Ok("I am a model.".to_string()));
        let mut repl = repl(gateway).await;
        assert_eq!(
            repl.handle_line("Exit").await.unwrap(),
            ControlFlow::Continue(())
        );
        assert_eq!(
            repl.session().assistant().gateway().requests(),
            vec![vec![Turn::user("Exit")]]
        );
    }

    #[tokio::test]
    async fn gateway_failure_stops_loading_and_propagates() {
        let gateway = ScriptedGateway::new("test-model")
            .answer(Err(Error::internal_server("boom", None)));
        let mut repl = repl(gateway).await;

        let err = repl.handle_line("Hello").await.unwrap_err();

        assert!(err.is_server_error());
        assert_eq!(output(&repl), &[Output::Loading("Thinking".to_string())]);
        assert_eq!(repl.session().message_count(), 1);
    }
}
