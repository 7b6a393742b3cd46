//! Hacker News headlines and article text.
//!
//! Headlines come from the public Firebase API: `v0/topstories.json` lists
//! story ids best first and `v0/item/<id>.json` describes one story. An
//! article body is the story URL rendered to plain text by the configured
//! reader command (`lynx -dump` by default).

use std::time::Duration;

use dashboard_protocol::ArticleRef;
use serde::Deserialize;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use crate::client::HttpClient;
use crate::command;
use crate::error::{Error, Result};

/// Base URL of the Hacker News API.
pub const HN_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// URL of the top stories list.
#[must_use]
pub fn top_stories_url() -> String {
    format!("{HN_API_BASE_URL}/topstories.json")
}

/// URL of a single item.
#[must_use]
pub fn item_url(id: u64) -> String {
    format!("{HN_API_BASE_URL}/item/{id}.json")
}

/// The fields of a Hacker News item the dashboard uses.
///
/// Text posts and jobs have no `url`; deleted items have no `title`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryItem {
    /// Item id.
    pub id: u64,
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Linked page.
    #[serde(default)]
    pub url: Option<String>,
}

impl From<StoryItem> for ArticleRef {
    fn from(item: StoryItem) -> Self {
        ArticleRef::new(item.id, item.title.unwrap_or_default(), item.url)
    }
}

/// Fetches the top story ids.
///
/// # Errors
///
/// Returns an error if the request fails or the list does not decode.
#[instrument(skip(client))]
pub async fn fetch_top_story_ids(client: &HttpClient) -> Result<Vec<u64>> {
    let ids: Vec<u64> = client.get_json(&top_stories_url()).await?;
    debug!(count = ids.len(), "fetched top story ids");
    Ok(ids)
}

/// Fetches one story. The API answers `null` for unknown ids.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] for an unknown id, or the underlying
/// request error.
pub async fn fetch_story(client: &HttpClient, id: u64) -> Result<StoryItem> {
    let item: Option<StoryItem> = client.get_json(&item_url(id)).await?;
    item.ok_or_else(|| Error::Unavailable {
        what: format!("story {id}"),
    })
}

/// Fetches headline records for the first `count` top stories.
///
/// Stories are fetched concurrently and returned in ranking order. A story
/// that fails to load is skipped.
///
/// # Errors
///
/// Returns an error if the top story list cannot be fetched.
#[instrument(skip(client))]
pub async fn fetch_summaries(client: &HttpClient, count: usize) -> Result<Vec<ArticleRef>> {
    let ids = fetch_top_story_ids(client).await?;

    let mut set = JoinSet::new();
    for (rank, id) in ids.into_iter().take(count).enumerate() {
        let client = client.clone();
        set.spawn(async move { (rank, id, fetch_story(&client, id).await) });
    }

    let mut ranked = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((rank, _, Ok(item))) => ranked.push((rank, ArticleRef::from(item))),
            Ok((_, id, Err(err))) => warn!(id, error = %err, "skipping story"),
            Err(err) => warn!(error = %err, "story fetch task failed"),
        }
    }
    ranked.sort_by_key(|(rank, _)| *rank);

    Ok(ranked.into_iter().map(|(_, article)| article).collect())
}

/// Renders the page linked by story `id` to plain-text lines.
///
/// `reader_command` is the program followed by its leading arguments; the
/// story URL is appended.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] if the story has no URL, or the error of
/// the item request or the reader command.
#[instrument(skip(client, reader_command))]
pub async fn fetch_body(
    client: &HttpClient,
    reader_command: &[String],
    id: u64,
    timeout: Duration,
) -> Result<Vec<String>> {
    let story = fetch_story(client, id).await?;
    let url = story.url.ok_or_else(|| Error::Unavailable {
        what: format!("link of story {id}"),
    })?;

    let (program, leading) = reader_command.split_first().ok_or_else(|| Error::Command {
        program: String::new(),
        reason: "empty reader command".to_string(),
    })?;
    let mut args = leading.to_vec();
    args.push(url);

    let stdout = command::run(program, &args, timeout).await?;
    let lines = command::decode_lines(&stdout);
    debug!(lines = lines.len(), "rendered article");
    Ok(lines)
}
