//! The live [`DataProviders`] implementation.

use std::path::PathBuf;
use std::time::Duration;

use dashboard_config::Config;
use dashboard_protocol::{ArticleRef, DataProviders, FetchResult, PendingTask, SystemSummary};
use tracing::{info, warn};

use crate::client::HttpClient;
use crate::error::Result;
use crate::system::{CPUINFO_PATH, OS_RELEASE_PATH};
use crate::{news, system, tasks, weather};

/// Data providers backed by the network and local programs.
///
/// # Examples
///
/// ```no_run
/// use dashboard_config::Config;
/// use dashboard_protocol::DataProviders;
/// use dashboard_providers::LiveProviders;
///
/// # async fn example() -> dashboard_providers::Result<()> {
/// let providers = LiveProviders::from_config(&Config::default())?;
/// println!("{}", providers.fetch_weather("Paris").await);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LiveProviders {
    http: HttpClient,
    reader_command: Vec<String>,
    timeout: Duration,
    cpuinfo_path: PathBuf,
    os_release_path: PathBuf,
}

impl LiveProviders {
    /// Builds the providers from the configured reader command and fetch
    /// deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.fetch_timeout();
        info!(
            timeout_secs = timeout.as_secs(),
            reader = ?config.reader_command,
            "creating live data providers"
        );
        Ok(Self {
            http: HttpClient::new(timeout)?,
            reader_command: config.reader_command.clone(),
            timeout,
            cpuinfo_path: PathBuf::from(CPUINFO_PATH),
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
        })
    }
}

impl DataProviders for LiveProviders {
    async fn fetch_weather(&self, location: &str) -> String {
        weather::fetch_report(&self.http, location).await
    }

    async fn fetch_top_story_ids(&self) -> FetchResult<Vec<u64>> {
        Ok(news::fetch_top_story_ids(&self.http).await?)
    }

    async fn fetch_article_summaries(&self, count: usize) -> FetchResult<Vec<ArticleRef>> {
        Ok(news::fetch_summaries(&self.http, count).await?)
    }

    async fn fetch_article_body(&self, story_id: u64) -> FetchResult<Vec<String>> {
        Ok(news::fetch_body(&self.http, &self.reader_command, story_id, self.timeout).await?)
    }

    async fn fetch_system_summary(&self) -> FetchResult<SystemSummary> {
        Ok(system::read_system_summary(&self.cpuinfo_path).await?)
    }

    async fn fetch_update_count(&self) -> FetchResult<u32> {
        Ok(system::count_updates(&self.os_release_path, self.timeout).await?)
    }

    async fn has_task_backend(&self) -> bool {
        let available = tasks::backend_available().await;
        if !available {
            warn!("task backend not installed, task pane disabled");
        }
        available
    }

    async fn fetch_pending_tasks(&self) -> FetchResult<Vec<PendingTask>> {
        Ok(tasks::fetch_pending(self.timeout).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_uses_configured_values() {
        let config = Config {
            reader_command: vec!["w3m".to_string(), "-dump".to_string()],
            fetch_timeout_secs: 3,
            ..Default::default()
        };
        let providers = LiveProviders::from_config(&config).unwrap();
        assert_eq!(providers.reader_command, vec!["w3m", "-dump"]);
        assert_eq!(providers.timeout, Duration::from_secs(3));
        assert_eq!(providers.http.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn system_summary_degrades_without_cpuinfo() {
        let mut providers = LiveProviders::from_config(&Config::default()).unwrap();
        providers.cpuinfo_path = PathBuf::from("/nonexistent/cpuinfo");
        let summary = providers.fetch_system_summary().await.unwrap();
        assert!(summary.is_unavailable());
    }

    #[tokio::test]
    async fn update_count_is_zero_off_arch() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("os-release");
        std::fs::write(&path, "ID=fedora\n").unwrap();

        let mut providers = LiveProviders::from_config(&Config::default()).unwrap();
        providers.os_release_path = path;
        assert_eq!(providers.fetch_update_count().await.unwrap(), 0);
    }
}
