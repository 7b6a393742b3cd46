//! The data provider capability.
//!
//! The dashboard never talks to the network or spawns processes from the
//! UI code. Everything it shows comes through a [`DataProviders`]
//! implementation injected into the application: the live collaborators in
//! `dashboard-providers`, or [`DummyProviders`](crate::dummy::DummyProviders)
//! and test fakes.
//!
//! Each call is awaited by the controller before the next draw, so a draw
//! always reflects the data fetched immediately before it.

use std::future::Future;

use crate::article::ArticleRef;
use crate::error::FetchResult;
use crate::system::{PendingTask, SystemSummary};

/// Fetch operations consumed by the dashboard.
///
/// Implementations may be written with `async fn`.
pub trait DataProviders {
    /// Returns a printable weather report for `location`.
    ///
    /// Never fails: a failure is returned as an error-describing string so
    /// the caller never branches on it.
    fn fetch_weather(&self, location: &str) -> impl Future<Output = String>;

    /// Returns the current top story identifiers, best first.
    fn fetch_top_story_ids(&self) -> impl Future<Output = FetchResult<Vec<u64>>>;

    /// Returns headline records for the first `count` top stories.
    fn fetch_article_summaries(
        &self,
        count: usize,
    ) -> impl Future<Output = FetchResult<Vec<ArticleRef>>>;

    /// Returns the rendered plain-text lines of the page linked by a story.
    fn fetch_article_body(&self, story_id: u64) -> impl Future<Output = FetchResult<Vec<String>>>;

    /// Returns the CPU summary for the top bar.
    fn fetch_system_summary(&self) -> impl Future<Output = FetchResult<SystemSummary>>;

    /// Returns the number of pending system updates.
    fn fetch_update_count(&self) -> impl Future<Output = FetchResult<u32>>;

    /// Returns `true` if a task backend is installed.
    fn has_task_backend(&self) -> impl Future<Output = bool>;

    /// Returns the pending tasks. An absent backend yields an empty list.
    fn fetch_pending_tasks(&self) -> impl Future<Output = FetchResult<Vec<PendingTask>>>;
}
