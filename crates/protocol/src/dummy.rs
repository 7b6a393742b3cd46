//! Dummy data providers for offline runs and testing.
//!
//! [`DummyProviders`] answers every [`DataProviders`] call from memory. The
//! binary uses it when `DASHBOARD_OFFLINE` is set, and the TUI tests use it
//! as their fake collaborator.
//!
//! # Examples
//!
//! ```
//! use dashboard_protocol::dummy::DummyProviders;
//!
//! let providers = DummyProviders::new();
//! assert_eq!(providers.articles().len(), 30);
//!
//! let empty = DummyProviders::new().with_article_count(0).without_task_backend();
//! assert!(empty.articles().is_empty());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::article::ArticleRef;
use crate::error::{FetchError, FetchResult};
use crate::provider::DataProviders;
use crate::system::{PendingTask, SystemSummary};

/// Number of canned headlines.
const DEFAULT_ARTICLE_COUNT: usize = 30;

/// Number of lines in a generated article body.
const DEFAULT_BODY_LINES: usize = 80;

/// Canned headline titles, cycled when more articles are requested.
const TITLES: &[&str] = &[
    "Show HN: A terminal dashboard written in a weekend",
    "The surprising economics of undersea cables",
    "Why your build is slow: a tour of incremental compilation",
    "A visual guide to B-trees",
    "Ask HN: What are you reading this month?",
    "Reverse engineering a 1990s pocket calculator",
    "How we cut our cloud bill by 60%",
    "Notes on writing a tiny garbage collector",
];

/// An in-memory implementation of [`DataProviders`].
#[derive(Debug)]
pub struct DummyProviders {
    articles: Vec<ArticleRef>,
    bodies: HashMap<u64, Vec<String>>,
    weather: String,
    system: SystemSummary,
    updates: u32,
    tasks: Option<Vec<PendingTask>>,
    fail_bodies: bool,
    summary_fetches: AtomicUsize,
    body_fetches: AtomicUsize,
}

impl DummyProviders {
    /// Creates providers with 30 headlines, generated bodies, a task
    /// backend with three pending tasks and a fixed weather report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            articles: generate_articles(DEFAULT_ARTICLE_COUNT),
            bodies: HashMap::new(),
            weather: "Paris: ⛅️  +12°C".to_string(),
            system: SystemSummary::new("Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz", 4, 1992),
            updates: 3,
            tasks: Some(vec![
                PendingTask::new(1, "Renew passport"),
                PendingTask::new(2, "Review dashboard layout"),
                PendingTask::new(3, "Water plants"),
            ]),
            fail_bodies: false,
            summary_fetches: AtomicUsize::new(0),
            body_fetches: AtomicUsize::new(0),
        }
    }

    /// Replaces the headlines with `count` generated ones.
    #[must_use]
    pub fn with_article_count(mut self, count: usize) -> Self {
        self.articles = generate_articles(count);
        self
    }

    /// Sets the body returned for one story.
    #[must_use]
    pub fn with_body(mut self, story_id: u64, lines: Vec<String>) -> Self {
        self.bodies.insert(story_id, lines);
        self
    }

    /// Makes every body fetch fail.
    #[must_use]
    pub fn with_failing_bodies(mut self) -> Self {
        self.fail_bodies = true;
        self
    }

    /// Removes the task backend.
    #[must_use]
    pub fn without_task_backend(mut self) -> Self {
        self.tasks = None;
        self
    }

    /// Sets the weather report.
    #[must_use]
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = weather.into();
        self
    }

    /// Returns the canned headlines.
    #[must_use]
    pub fn articles(&self) -> &[ArticleRef] {
        &self.articles
    }

    /// Number of times the headline list was fetched.
    #[must_use]
    pub fn summary_fetches(&self) -> usize {
        self.summary_fetches.load(Ordering::Relaxed)
    }

    /// Number of times an article body was fetched.
    #[must_use]
    pub fn body_fetches(&self) -> usize {
        self.body_fetches.load(Ordering::Relaxed)
    }
}

impl Default for DummyProviders {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProviders for DummyProviders {
    async fn fetch_weather(&self, _location: &str) -> String {
        self.weather.clone()
    }

    async fn fetch_top_story_ids(&self) -> FetchResult<Vec<u64>> {
        Ok(self.articles.iter().map(|a| a.id).collect())
    }

    async fn fetch_article_summaries(&self, count: usize) -> FetchResult<Vec<ArticleRef>> {
        self.summary_fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.articles.iter().take(count).cloned().collect())
    }

    async fn fetch_article_body(&self, story_id: u64) -> FetchResult<Vec<String>> {
        self.body_fetches.fetch_add(1, Ordering::Relaxed);
        if self.fail_bodies {
            return Err(FetchError::Command {
                program: "lynx".to_string(),
                reason: "not installed".to_string(),
            });
        }
        if let Some(lines) = self.bodies.get(&story_id) {
            return Ok(lines.clone());
        }
        if !self.articles.iter().any(|a| a.id == story_id) {
            return Err(FetchError::Unavailable {
                what: format!("story {story_id}"),
            });
        }
        Ok(generate_body(story_id))
    }

    async fn fetch_system_summary(&self) -> FetchResult<SystemSummary> {
        Ok(self.system.clone())
    }

    async fn fetch_update_count(&self) -> FetchResult<u32> {
        Ok(self.updates)
    }

    async fn has_task_backend(&self) -> bool {
        self.tasks.is_some()
    }

    async fn fetch_pending_tasks(&self) -> FetchResult<Vec<PendingTask>> {
        Ok(self.tasks.clone().unwrap_or_default())
    }
}

/// Story ids start here so they look like real Hacker News ids.
const FIRST_STORY_ID: u64 = 41_000_000;

fn generate_articles(count: usize) -> Vec<ArticleRef> {
    (0..count)
        .map(|i| {
            let id = FIRST_STORY_ID + i as u64;
            let title = TITLES[i % TITLES.len()];
            ArticleRef::new(id, title, Some(format!("https://example.com/story/{id}")))
        })
        .collect()
}

fn generate_body(story_id: u64) -> Vec<String> {
    let mut lines = vec![format!("Story {story_id}"), String::new()];
    lines.extend((1..=DEFAULT_BODY_LINES).map(|n| format!("Paragraph line {n} of story {story_id}.")));
    lines
}
