//! Error catalogue and fetch errors.
//!
//! [`DashError`] is the tagged record shown on the full-screen error view:
//! a kind, a numeric code, a human message and a [`Severity`] that selects
//! one of four visual treatments. [`FetchError`] is what a data provider
//! returns when a collaborator fails; the controller never lets it escape
//! and renders a placeholder instead.

use serde::{Deserialize, Serialize};

/// How serious an error is. Each severity has its own visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational.
    Info,
    /// Degraded but usable.
    Warning,
    /// An operation failed.
    Error,
    /// The dashboard cannot operate.
    Critical,
}

impl Severity {
    /// Returns the display label of the severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }
}

/// The catalogued error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The terminal is below the minimum layout size.
    ScreenTooSmall,
    /// An input could not be interpreted.
    InvalidInput,
}

impl ErrorKind {
    /// Returns the catalogue code of this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::ScreenTooSmall => 1001,
            Self::InvalidInput => 1002,
        }
    }

    /// Returns the catalogue message of this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ScreenTooSmall => "Screen width less than required size",
            Self::InvalidInput => "Invalid Input",
        }
    }

    /// Returns the catalogue severity of this kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ScreenTooSmall => Severity::Critical,
            Self::InvalidInput => Severity::Info,
        }
    }
}

/// A tagged error shown on the error screen.
///
/// # Examples
///
/// ```
/// use dashboard_protocol::{DashError, ErrorKind, Severity};
///
/// let error = DashError::from_kind(ErrorKind::InvalidInput);
/// assert_eq!(error.status_line(), "1002: Invalid Input");
/// assert_eq!(error.severity, Severity::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct DashError {
    /// The catalogued kind.
    pub kind: ErrorKind,
    /// Numeric code shown to the user.
    pub code: u16,
    /// Human readable message.
    pub message: String,
    /// Selects the visual treatment.
    pub severity: Severity,
}

impl DashError {
    /// Builds the catalogue entry for `kind`.
    #[must_use]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: kind.message().to_string(),
            severity: kind.severity(),
        }
    }

    /// The error raised when the terminal is below the minimum size.
    #[must_use]
    pub fn screen_too_small() -> Self {
        Self::from_kind(ErrorKind::ScreenTooSmall)
    }

    /// Returns a copy with a different severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Formats the `"<code>: <message>"` line of the error screen.
    #[must_use]
    pub fn status_line(&self) -> String {
        self.to_string()
    }
}

/// Errors a data provider can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("network error fetching {url}: {reason}")]
    Network {
        /// The requested URL.
        url: String,
        /// Transport failure description.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// A response or command output could not be decoded.
    #[error("failed to decode {what}: {reason}")]
    Decode {
        /// What was being decoded.
        what: String,
        /// Decoder error description.
        reason: String,
    },

    /// A helper command could not be run or exited unsuccessfully.
    #[error("command `{program}` failed: {reason}")]
    Command {
        /// The program that was run.
        program: String,
        /// Failure description.
        reason: String,
    },

    /// The operation did not finish within its deadline.
    #[error("{operation} timed out after {secs}s")]
    Timeout {
        /// The operation that timed out.
        operation: String,
        /// The deadline in seconds.
        secs: u64,
    },

    /// The requested item does not exist.
    #[error("{what} is not available")]
    Unavailable {
        /// What was requested.
        what: String,
    },
}

/// A specialized Result type for data provider operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
