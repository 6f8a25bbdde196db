use std::io::{self, BufRead, StdinLock, Stdout, Write};

use todolist_core::{Confirmation, Notifier};

/// Notifications on a plain terminal: messages are printed, confirmations
/// are read as a y/N answer.
pub struct ConsoleNotifier<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsoleNotifier<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleNotifier<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print(&mut self, title: &str, message: &str) {
        if let Err(e) = writeln!(self.output, "{} {}", title, message) {
            tracing::warn!(error = %e, "could not print notification");
        }
    }
}

impl<R: BufRead, W: Write> Notifier for ConsoleNotifier<R, W> {
    fn notify_success(&mut self, title: &str, message: &str) {
        self.print(title, message);
    }

    fn confirm_action(&mut self, title: &str, message: &str) -> Confirmation {
        let prompt = write!(self.output, "{} {} [y/N]: ", title, message)
            .and_then(|_| self.output.flush());
        if let Err(e) = prompt {
            tracing::warn!(error = %e, "could not show confirmation prompt");
            return Confirmation::Cancelled;
        }

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return Confirmation::Cancelled;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes").into()
    }

    fn notify_info(&mut self, title: &str, message: &str) {
        self.print(title, message);
    }
}
