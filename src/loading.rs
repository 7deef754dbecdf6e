//! Animated "thinking" indicator shown while a completion is in flight.
//!
//! The indicator runs as its own tokio task and redraws a single terminal
//! line on a timer.  It owns its writer and touches no shared state, so the
//! only coordination needed is the oneshot used to stop it.

use std::io::Write;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::render::{ANSI_RESET, ANSI_YELLOW, CLEAR_LINE, PREFIX_AI};

/// Time between redraws.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(400);

/// Largest number of dots drawn after the message.
pub const MAX_DOTS: usize = 3;

/// A running loading indicator.
///
/// Call [`LoadingIndicator::stop`] before printing anything else; it returns
/// only after the indicator's line has been cleared.
pub struct LoadingIndicator {
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LoadingIndicator {
    /// Start animating `message` on `writer`.
    ///
    /// The first frame shows [`MAX_DOTS`] dots; after that the dot count
    /// cycles from one to [`MAX_DOTS`] every [`FRAME_INTERVAL`].
    pub fn start<W>(message: impl Into<String>, writer: W, use_color: bool) -> Self
    where
        W: Write + Send + 'static,
    {
        let (cancel, cancelled) = oneshot::channel();
        let handle = tokio::spawn(animate(message.into(), writer, use_color, cancelled));
        Self {
            cancel: Some(cancel),
            handle: Some(handle),
        }
    }

    /// Stop the animation and wait until its line is cleared.
    pub async fn stop(mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

/// Text of one animation frame.
pub fn frame(message: &str, dots: usize) -> String {
    format!("{PREFIX_AI}{message}{}", ".".repeat(dots))
}

async fn animate<W: Write>(
    message: String,
    mut writer: W,
    use_color: bool,
    mut cancelled: oneshot::Receiver<()>,
) {
    let mut dots = MAX_DOTS;
    draw(&mut writer, &message, dots, use_color);

    let mut ticker = interval_at(Instant::now() + FRAME_INTERVAL, FRAME_INTERVAL);
    loop {
        tokio::select! {
            biased;
            _ = &mut cancelled => break,
            _ = ticker.tick() => {
                dots = dots % MAX_DOTS + 1;
                let _ = write!(writer, "{CLEAR_LINE}");
                draw(&mut writer, &message, dots, use_color);
            }
        }
    }

    let _ = write!(writer, "{CLEAR_LINE}");
    let _ = writer.flush();
}

fn draw<W: Write>(writer: &mut W, message: &str, dots: usize, use_color: bool) {
    let text = frame(message, dots);
    let _ = if use_color {
        write!(writer, "{ANSI_YELLOW}{text}{ANSI_RESET}")
    } else {
        write!(writer, "{text}")
    };
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn frames() {
        assert_eq!(frame("Thinking", 1), "[AI] Thinking.");
        assert_eq!(frame("Thinking", 3), "[AI] Thinking...");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_clears_the_line() {
        let buffer = SharedBuffer::default();
        let indicator = LoadingIndicator::start("Thinking", buffer.clone(), false);
        indicator.stop().await;

        assert_eq!(buffer.contents(), format!("[AI] Thinking...{CLEAR_LINE}"));
    }

    #[tokio::test(start_paused = true)]
    async fn dots_cycle_on_each_tick() {
        let buffer = SharedBuffer::default();
        let indicator = LoadingIndicator::start("Thinking", buffer.clone(), false);

        tokio::time::sleep(FRAME_INTERVAL * 4 + FRAME_INTERVAL / 2).await;
        indicator.stop().await;

        let expected = [
            "[AI] Thinking...".to_string(),
            format!("{CLEAR_LINE}[AI] Thinking."),
            format!("{CLEAR_LINE}[AI] Thinking.."),
            format!("{CLEAR_LINE}[AI] Thinking..."),
            format!("{CLEAR_LINE}[AI] Thinking."),
            CLEAR_LINE.to_string(),
        ]
        .concat();
        assert_eq!(buffer.contents(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn color_wraps_each_frame() {
        let buffer = SharedBuffer::default();
        let indicator = LoadingIndicator::start("Thinking", buffer.clone(), true);
        indicator.stop().await;

        assert!(
            buffer
                .contents()
                .starts_with(&format!("{ANSI_YELLOW}[AI] Thinking...{ANSI_RESET}"))
        );
    }
}
