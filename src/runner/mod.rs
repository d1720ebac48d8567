//! runner
//!
//! Execution of the external programs that manage adapters and WiFi.
//!
//! # Design
//!
//! Adapter and WiFi managers never spawn processes themselves. They go
//! through the [`CommandRunner`] trait, so argument construction and
//! output parsing can be tested against [`mock::MockRunner`] without
//! touching real hardware.

pub mod mock;

use std::io;
use std::process::Command;
use thiserror::Error;

/// Errors from running an external program.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    /// The program ran but reported failure.
    #[error("'{command}' failed (exit code {}): {stderr}", format_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn format_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Captured result of a finished program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramOutput {
    /// Whether the program exited successfully.
    pub success: bool,
    /// Exit code, if the program exited normally.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProgramOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and error text.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs external programs.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and capture its output.
    ///
    /// A non-zero exit is NOT an error here; see [`run_checked`].
    fn run(&self, program: &str, args: &[&str]) -> Result<ProgramOutput, RunError>;
}

/// Run a program and turn a failed exit into [`RunError::Failed`].
///
/// Returns the captured standard output on success.
pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
) -> Result<String, RunError> {
    let output = runner.run(program, args)?;
    check(output, || display_command(program, args))
}

/// Like [`run_checked`], but `secret` is masked in any error message.
pub fn run_checked_redacting(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    secret: &str,
) -> Result<String, RunError> {
    let output = runner.run(program, args)?;
    check(output, || {
        let masked: Vec<&str> = args
            .iter()
            .map(|&arg| {
                if !secret.is_empty() && arg == secret {
                    "<redacted>"
                } else {
                    arg
                }
            })
            .collect();
        display_command(program, &masked)
    })
}

fn check(output: ProgramOutput, command: impl FnOnce() -> String) -> Result<String, RunError> {
    if output.success {
        Ok(output.stdout)
    } else {
        Err(RunError::Failed {
            command: command(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        })
    }
}

/// Render a command line for messages.
///
/// Callers must not pass secrets in `args` if the result may be shown.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs programs on the local system via [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProgramOutput, RunError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| RunError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        Ok(ProgramOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Operating system family, which decides the tools used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and other Unix-likes: `ip` and `nmcli`.
    Unix,
    /// Windows: `netsh`.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRunner;
    use super::*;

    #[test]
    fn run_checked_returns_stdout() {
        let runner = MockRunner::new().respond(ProgramOutput::ok("hello\n"));
        let out = run_checked(&runner, "echo", &["hello"]).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn run_checked_reports_failure() {
        let runner = MockRunner::new().respond(ProgramOutput::failed(
            2,
            "RTNETLINK answers: Operation not permitted\n",
        ));
        let err = run_checked(&runner, "ip", &["link", "set", "dev", "eth0", "down"]).unwrap_err();

        match err {
            RunError::Failed {
                command,
                code,
                stderr,
            } => {
                assert_eq!(command, "ip link set dev eth0 down");
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "RTNETLINK answers: Operation not permitted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn redacting_masks_secret() {
        let runner = MockRunner::new().respond(ProgramOutput::failed(10, "No network with SSID"));
        let err = run_checked_redacting(
            &runner,
            "nmcli",
            &["device", "wifi", "connect", "home", "password", "hunter2"],
            "hunter2",
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("password <redacted>"));
        assert!(!message.contains("hunter2"));
    }

    #[test]
    fn failed_message_includes_code() {
        let err = RunError::Failed {
            command: "nmcli".to_string(),
            code: None,
            stderr: "killed".to_string(),
        };
        assert_eq!(err.to_string(), "'nmcli' failed (exit code none): killed");
    }

    #[test]
    fn system_runner_spawn_error() {
        let err = SystemRunner
            .run("adapman-test-no-such-program", &[])
            .unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
    }

    #[test]
    fn current_platform() {
        #[cfg(windows)]
        assert_eq!(Platform::current(), Platform::Windows);
        #[cfg(not(windows))]
        assert_eq!(Platform::current(), Platform::Unix);
    }
}
