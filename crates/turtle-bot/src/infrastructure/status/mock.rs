//! Mock status sink that records every reported line for test assertions.

use std::sync::Mutex;

use crate::application::execute_command::StatusSink;

/// A [`StatusSink`] that appends each report to an in-memory log.
///
/// Where the console sink overwrites its single line, the mock keeps the
/// full history so tests can assert on the exact sequence of reports.
#[derive(Debug, Default)]
pub struct MockStatusSink {
    /// Every line reported, in order.
    pub reports: Mutex<Vec<String>>,
}

impl MockStatusSink {
    /// Creates a sink with an empty report log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all reports made so far.
    pub fn snapshot(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl StatusSink for MockStatusSink {
    fn report(&self, text: &str) {
        self.reports.lock().unwrap().push(text.to_string());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
