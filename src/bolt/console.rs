// file: src/bolt/console.rs
// version: 1.0.0
// guid: c61a0f3e-5d27-48b9-9e14-a73d08f2b5e6

//! Operator-facing console lines
//!
//! These lines are scraped by existing tooling and must stay verbatim, so
//! they are kept apart from `tracing` events.

use std::cell::RefCell;
use std::io::Write;

/// Sink for the fixed `Running:` / `ERROR:` / `Exit status was:` / `Output was:` lines
pub trait Console {
    fn line(&self, message: &str);
}

impl<T: Console + ?Sized> Console for &T {
    fn line(&self, message: &str) {
        (**self).line(message)
    }
}

/// Writes each line to stdout, `puts` style: a trailing newline in the
/// message is not doubled.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, message: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // A closed stdout must not abort the remote operation
        let _ = writeln!(handle, "{}", message.strip_suffix('\n').unwrap_or(message));
    }
}

/// Keeps lines in memory for inspection
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == message)
    }
}

impl Console for RecordingConsole {
    fn line(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_console_keeps_order() {
        // Arrange
        let console = RecordingConsole::new();

        // Act
        console.line("Running: x");
        console.line("Exit status was: 0");

        // Assert
        assert_eq!(console.lines(), vec!["Running: x", "Exit status was: 0"]);
        assert!(console.contains("Exit status was: 0"));
        assert!(!console.contains("Exit status was"));
    }

    #[test]
    fn test_console_through_reference() {
        let console = RecordingConsole::new();
        let by_ref: &dyn Console = &console;

        by_ref.line("hello");

        assert_eq!(console.lines(), vec!["hello"]);
    }
}
