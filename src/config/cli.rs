use crate::domain::ports::Presenter;
use std::io::Write;

/// Form-mode presenter writing results to stdout and errors to stderr.
#[derive(Debug)]
pub struct ConsolePresenter<O = std::io::Stdout, E = std::io::Stderr> {
    out: O,
    err: E,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::with_writers(std::io::stdout(), std::io::stderr())
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> ConsolePresenter<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Presenter for ConsolePresenter<O, E> {
    // Nothing is on screen between submissions of a one-shot run.
    fn clear(&mut self) {}

    fn show_result(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::error!("Failed to write result: {}", e);
        }
    }

    fn show_error(&mut self, text: &str) {
        if let Err(e) = writeln!(self.err, "❌ {}", text) {
            tracing::error!("Failed to write error: {}", e);
        }
    }
}
