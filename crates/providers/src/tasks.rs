//! Pending tasks from Taskwarrior.

use std::time::Duration;

use dashboard_protocol::PendingTask;
use tracing::{debug, instrument};

use crate::command;
use crate::error::{Error, Result};

/// The Taskwarrior binary.
pub const TASK_PROGRAM: &str = "task";

/// Returns `true` if the Taskwarrior binary can be spawned.
pub async fn backend_available() -> bool {
    command::is_installed(TASK_PROGRAM).await
}

/// Parses `task export` output.
///
/// Empty output means no tasks.
///
/// # Errors
///
/// Returns [`Error::Json`] if the output is not a JSON array of tasks.
///
/// # Examples
///
/// ```
/// use dashboard_providers::tasks::parse_export;
///
/// let tasks = parse_export(br#"[{"id":1,"description":"Buy milk","status":"pending"}]"#).unwrap();
/// assert_eq!(tasks[0].display_line(), "1 Buy milk");
/// ```
pub fn parse_export(stdout: &[u8]) -> Result<Vec<PendingTask>> {
    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|source| Error::Json {
        what: "task export".to_string(),
        source,
    })
}

/// Fetches the pending tasks.
///
/// # Errors
///
/// Returns an error if Taskwarrior cannot be run or its output does not
/// parse.
#[instrument]
pub async fn fetch_pending(timeout: Duration) -> Result<Vec<PendingTask>> {
    let args = ["status:pending".to_string(), "export".to_string()];
    let stdout = command::run(TASK_PROGRAM, &args, timeout).await?;
    let tasks = parse_export(&stdout)?;
    debug!(count = tasks.len(), "fetched pending tasks");
    Ok(tasks)
}
