//! Cumulative user-visible message buffer.
//!
//! Store errors are appended, newline-joined, rather than replacing prior
//! messages, so multiple independent failures in one action all stay
//! visible. The buffer is cleared at the start of each new top-level action
//! attempt.

/// Accumulates human-readable messages for the host UI.
#[derive(Debug, Default)]
pub struct MessageBuffer {
    lines: Vec<String>,
}

impl MessageBuffer {
    /// Append a message line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Drop all accumulated messages.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The accumulated lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All messages joined with newlines.
    #[must_use]
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }
}
