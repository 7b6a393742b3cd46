//! HTTP client shared by the weather and news providers.
//!
//! [`HttpClient`] wraps a [`reqwest::Client`] built with the configured
//! fetch deadline, and turns transport failures and non-success statuses
//! into [`Error`] values carrying the URL.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("dashboard/", env!("CARGO_PKG_VERSION"));

/// A thin HTTP client with a per-request deadline.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Http {
                url: String::new(),
                source,
            })?;
        Ok(Self { inner, timeout })
    }

    /// Returns the per-request deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the deadline elapses,
    /// [`Error::Status`] for a non-success status and [`Error::Http`] for
    /// any other transport failure.
    #[instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "non-success status");
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.transport_error(url, e))
    }

    /// Fetches `url` and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`get_text`](Self::get_text), plus [`Error::Json`] if the
    /// body does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| Error::Json {
            what: url.to_string(),
            source,
        })
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout {
                operation: format!("GET {url}"),
                after: self.timeout,
            }
        } else {
            Error::Http {
                url: url.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_timeout() {
        let client = HttpClient::new(Duration::from_secs(7)).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn user_agent_names_the_crate_version() {
        assert!(USER_AGENT.starts_with("dashboard/"));
    }
}
