//! Result callback channel.
//!
//! Introspective commands hand their formatted text to an [`OutputSink`].
//! The sink is always passed in by the caller.

use parking_lot::Mutex;
use std::io::Write;

/// Receiver of introspective command output.
pub trait OutputSink: Send + Sync {
    /// Deliver one block of text.
    fn emit(&self, text: &str);
}

impl<F> OutputSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, text: &str) {
        self(text)
    }
}

/// Writes each emission as a line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // A closed stdout is not a routing failure.
        let _ = writeln!(handle, "{}", text);
    }
}

/// Collects emissions in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain everything emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Number of emissions so far.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl OutputSink for CaptureSink {
    fn emit(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}
