//! Running helper programs with a deadline.
//!
//! The article reader, the update counter and the task backend all shell
//! out to external programs. [`run`] spawns one through
//! [`tokio::process::Command`], waits for it under a deadline, and
//! returns its standard output.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Runs `program` with `args` and returns its standard output.
///
/// The child is killed if it is still running when the deadline elapses.
///
/// # Errors
///
/// Returns [`Error::Command`] if the program cannot be spawned or exits
/// unsuccessfully, and [`Error::Timeout`] if it does not finish within
/// `timeout`.
#[instrument(skip(args), fields(args = args.len()))]
pub async fn run(program: &str, args: &[String], timeout: Duration) -> Result<Vec<u8>> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::Command {
                program: program.to_string(),
                reason: "not installed".to_string(),
            });
        }
        Ok(Err(e)) => {
            return Err(Error::Command {
                program: program.to_string(),
                reason: e.to_string(),
            });
        }
        Err(_) => {
            return Err(Error::Timeout {
                operation: format!("`{program}`"),
                after: timeout,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(code = ?output.status.code(), %stderr, "command exited unsuccessfully");
        return Err(Error::Command {
            program: program.to_string(),
            reason: match output.status.code() {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            },
        });
    }

    Ok(output.stdout)
}

/// Returns `true` if `program` can be spawned.
///
/// The exit status is irrelevant; only a missing binary counts as
/// unavailable.
pub async fn is_installed(program: &str) -> bool {
    let spawned = Command::new(program)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn();

    match spawned {
        Ok(mut child) => {
            let _ = child.kill().await;
            true
        }
        Err(e) => {
            debug!(program, error = %e, "program not available");
            false
        }
    }
}

/// Decodes command output as text, replacing invalid UTF-8.
#[must_use]
pub fn decode_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
