//! Console status sink: overwrites one terminal line per report.

use std::io::{self, Write};

use crate::application::execute_command::StatusSink;

/// Width the status line is padded to, so a short report fully covers a
/// longer previous one.
const LINE_WIDTH: usize = 40;

/// A [`StatusSink`] that rewrites a single terminal line in place.
///
/// Reporting is best-effort: write and flush errors are swallowed, because
/// a broken display must never take the control loop down with it.
#[derive(Debug, Default)]
pub struct ConsoleStatusSink;

impl ConsoleStatusSink {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for ConsoleStatusSink {
    fn report(&self, text: &str) {
        let mut out = io::stdout();
        // Carriage return without newline keeps the cursor on the same line.
        let _ = write!(out, "\r{text:<LINE_WIDTH$}");
        let _ = out.flush();
    }
}
