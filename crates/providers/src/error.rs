//! Error types for live provider operations.
//!
//! This module defines the errors raised while talking to the weather and
//! news services, reading system files, or running helper commands. They
//! convert into [`FetchError`], the provider-neutral error the dashboard
//! consumes.

use std::time::Duration;

use dashboard_protocol::FetchError;

/// Errors that can occur while fetching live data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request failed before a response was received.
    #[error("request to {url} failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// A JSON payload could not be decoded.
    #[error("failed to decode {what}: {source}")]
    Json {
        /// What was being decoded.
        what: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A helper command could not be spawned or failed.
    #[error("command `{program}` failed: {reason}")]
    Command {
        /// The program that was run.
        program: String,
        /// Failure description.
        reason: String,
    },

    /// The operation did not finish within its deadline.
    #[error("{operation} timed out after {}s", .after.as_secs())]
    Timeout {
        /// The operation that timed out.
        operation: String,
        /// The deadline that elapsed.
        after: Duration,
    },

    /// The requested item does not exist.
    #[error("{what} is not available")]
    Unavailable {
        /// What was requested.
        what: String,
    },

    /// An I/O error occurred while reading a system file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for live provider operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        match err {
            Error::Http { url, source } => FetchError::Network {
                url,
                reason: source.to_string(),
            },
            Error::Status { url, status } => FetchError::Status { url, status },
            Error::Json { what, source } => FetchError::Decode {
                what,
                reason: source.to_string(),
            },
            Error::Command { program, reason } => FetchError::Command { program, reason },
            Error::Timeout { operation, after } => FetchError::Timeout {
                operation,
                secs: after.as_secs(),
            },
            Error::Unavailable { what } => FetchError::Unavailable { what },
            Error::Io(source) => FetchError::Unavailable {
                what: format!("system file ({source})"),
            },
        }
    }
}
