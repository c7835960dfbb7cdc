//! External command execution.
//!
//! Every external tool invocation goes through [`run_command`], which logs
//! the invocation, runs it synchronously with inherited stdio, and returns
//! an explicit [`CommandOutcome`]. Escalation policy belongs to the caller;
//! the runner itself never aborts anything.

use std::path::Path;
use std::process::Command;

use fetch_core::Reporter;

/// Result of running a single external command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// The command line as logged.
    pub command: String,
    /// Whether the command ran and exited zero.
    pub success: bool,
    /// Exit code, if the process ran to completion.
    pub exit_code: Option<i32>,
}

/// Run an external command synchronously, streaming its output.
///
/// The invocation is logged as a `RUN:` record before execution; a spawn
/// failure or non-zero exit is logged as `ERR:` and returned as an
/// unsuccessful outcome. No timeout is enforced: a hanging tool blocks the
/// whole run.
pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    reporter: &Reporter,
) -> CommandOutcome {
    let rendered = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };
    match cwd {
        Some(dir) => reporter.log(&format!("RUN: {} (cwd={})", rendered, dir.display())),
        None => reporter.log(&format!("RUN: {rendered}")),
    }

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    match cmd.status() {
        Ok(status) => {
            if !status.success() {
                reporter.log(&format!(
                    "ERR: command failed: {} (exit code: {:?})",
                    rendered,
                    status.code()
                ));
            }
            CommandOutcome {
                command: rendered,
                success: status.success(),
                exit_code: status.code(),
            }
        }
        Err(e) => {
            reporter.log(&format!("ERR: failed to start: {rendered}: {e}"));
            CommandOutcome {
                command: rendered,
                success: false,
                exit_code: None,
            }
        }
    }
}
