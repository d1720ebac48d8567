//! runner::mock
//!
//! Scripted command runner for deterministic testing.
//!
//! # Design
//!
//! Responses are queued and handed out in order, one per call. When the
//! queue is empty every call succeeds with empty output. Every call is
//! recorded so tests can assert on the exact command lines.
//!
//! # Example
//!
//! ```
//! use adapman::runner::mock::MockRunner;
//! use adapman::runner::{CommandRunner, ProgramOutput};
//!
//! let runner = MockRunner::new().respond(ProgramOutput::ok("up\n"));
//!
//! let out = runner.run("cat", &["/sys/class/net/eth0/operstate"]).unwrap();
//! assert_eq!(out.stdout, "up\n");
//! assert_eq!(runner.calls()[0].command_line(), "cat /sys/class/net/eth0/operstate");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{display_command, CommandRunner, ProgramOutput, RunError};

/// Mock runner for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug, Default)]
struct MockRunnerInner {
    responses: VecDeque<ProgramOutput>,
    calls: Vec<Invocation>,
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The call rendered as a single command line.
    pub fn command_line(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        display_command(&self.program, &args)
    }
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered call.
    pub fn respond(self, output: ProgramOutput) -> Self {
        self.lock().responses.push_back(output);
        self
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<Invocation> {
        self.lock().calls.clone()
    }

    /// Recorded calls rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(Invocation::command_line).collect()
    }

    // A panicking test thread must not hide the calls recorded before it.
    fn lock(&self) -> MutexGuard<'_, MockRunnerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProgramOutput, RunError> {
        let mut inner = self.lock();
        inner.calls.push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        Ok(inner
            .responses
            .pop_front()
            .unwrap_or_else(|| ProgramOutput::ok("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_are_fifo() {
        let runner = MockRunner::new()
            .respond(ProgramOutput::ok("first"))
            .respond(ProgramOutput::failed(1, "second"));

        assert_eq!(runner.run("a", &[]).unwrap().stdout, "first");
        assert!(!runner.run("b", &[]).unwrap().success);
        assert_eq!(runner.run("c", &[]).unwrap(), ProgramOutput::ok(""));
    }

    #[test]
    fn clones_share_recorded_calls() {
        let runner = MockRunner::new();
        let clone = runner.clone();
        clone.run("ip", &["link"]).unwrap();
        assert_eq!(runner.command_lines(), vec!["ip link".to_string()]);
    }
}
