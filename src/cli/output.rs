//! Buffered output streams and the dispatch result
//!
//! The dispatcher never writes to the process streams. Each invocation
//! collects its text here and the binary replays it, so tests can assert
//! on output without process-level capture.

use std::fmt::Display;

use crate::exitcode;

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A handler ran to completion.
    Success,
    /// Help or version text was emitted.
    HelpDisplayed,
    /// The argument vector did not resolve against the command tree.
    UsageError,
    /// A tool delegate reported failure.
    DelegateError,
}

/// Captured streams of one invocation.
#[derive(Debug, Default)]
pub struct Console {
    out: String,
    err: String,
}

impl Console {
    /// Append a line to the captured stdout.
    pub fn out_line(&mut self, text: impl Display) {
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    /// Append raw text to the captured stdout.
    pub fn out_text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Append a line to the captured stderr.
    pub fn err_line(&mut self, text: impl Display) {
        self.err.push_str(&text.to_string());
        self.err.push('\n');
    }

    /// Append raw text to the captured stderr.
    pub fn err_text(&mut self, text: &str) {
        self.err.push_str(text);
    }
}

/// Exit status plus the captured streams of one invocation.
#[derive(Debug)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub(crate) fn new(outcome: Outcome, exit_code: i32, console: Console) -> Self {
        Self {
            outcome,
            exit_code,
            stdout: console.out,
            stderr: console.err,
        }
    }

    /// True when the invocation ended with exit status 0.
    pub fn success(&self) -> bool {
        self.exit_code == exitcode::OK
    }
}
