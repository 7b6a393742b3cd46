//! System and task records shown in the top bar and task pane.

use serde::{Deserialize, Serialize};

/// Placeholder used when a system value cannot be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// A short CPU description for the top bar.
///
/// # Examples
///
/// ```
/// use dashboard_protocol::SystemSummary;
///
/// let cpu = SystemSummary::new("AMD Ryzen 7", 8, 3600);
/// assert_eq!(cpu.summary_line(), "8 Core AMD Ryzen 7 @ 3600 MHz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSummary {
    /// CPU model name.
    pub cpu_model: String,
    /// Number of physical cores.
    pub cpu_cores: u32,
    /// Current clock in MHz, truncated to an integer.
    pub cpu_mhz: u32,
}

impl SystemSummary {
    /// Creates a new summary.
    #[must_use]
    pub fn new(cpu_model: impl Into<String>, cpu_cores: u32, cpu_mhz: u32) -> Self {
        Self {
            cpu_model: cpu_model.into(),
            cpu_cores,
            cpu_mhz,
        }
    }

    /// The summary used when the platform exposes no CPU information.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(NOT_AVAILABLE, 0, 0)
    }

    /// Returns `true` if this is the [`unavailable`](Self::unavailable) summary.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.cpu_model == NOT_AVAILABLE && self.cpu_cores == 0
    }

    /// Formats the summary as `"<cores> Core <model> @ <mhz> MHz"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        if self.is_unavailable() {
            return format!("CPU: {NOT_AVAILABLE}");
        }
        format!(
            "{} Core {} @ {} MHz",
            self.cpu_cores, self.cpu_model, self.cpu_mhz
        )
    }
}

/// A pending task from the task backend.
///
/// The field names match Taskwarrior's `export` output so the records can be
/// deserialized directly; other exported fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    /// Working-set id of the task.
    pub id: u64,
    /// Task description.
    pub description: String,
}

impl PendingTask {
    /// Creates a new pending task.
    #[must_use]
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// Formats the task as `"<id> <description>"`.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} {}", self.id, self.description)
    }
}
