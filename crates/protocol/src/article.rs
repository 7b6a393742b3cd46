//! Article references and bodies.
//!
//! An [`ArticleRef`] is the headline record shown in the article list; an
//! [`ArticleBody`] holds the rendered plain-text lines of one article for the
//! reader pane.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a story has no link.
pub const NO_URL: &str = "No URL";

/// Line shown in the reader when an article body cannot be loaded.
pub const BODY_UNAVAILABLE: &str = "Unable to load this article.";

/// A headline in the article list.
///
/// Immutable once fetched: the session caches the whole list and only
/// replaces it when the cache is explicitly invalidated.
///
/// # Examples
///
/// ```
/// use dashboard_protocol::ArticleRef;
///
/// let article = ArticleRef::new(7, "Rust 2024 released", Some("https://blog.rust-lang.org".into()));
/// assert_eq!(article.display_line(), "7 Rust 2024 released");
/// assert_eq!(article.url_or_placeholder(), "https://blog.rust-lang.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleRef {
    /// Story identifier.
    pub id: u64,
    /// Story title, untruncated.
    pub title: String,
    /// Link to the story, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ArticleRef {
    /// Creates a new article reference.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url,
        }
    }

    /// Returns the list entry text, `"<id> <title>"`, before truncation.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} {}", self.id, self.title)
    }

    /// Returns the URL, or [`NO_URL`] when the story has none.
    #[must_use]
    pub fn url_or_placeholder(&self) -> &str {
        self.url.as_deref().unwrap_or(NO_URL)
    }
}

/// The text lines of one opened article.
///
/// Lines are already rendered to plain text but not yet wrapped to the pane
/// width; wrapping happens at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleBody {
    /// The story this body belongs to.
    pub article_id: u64,
    /// The body lines, in reading order.
    pub lines: Vec<String>,
}

impl ArticleBody {
    /// Creates a body from fetched lines.
    #[must_use]
    pub fn new(article_id: u64, lines: Vec<String>) -> Self {
        Self { article_id, lines }
    }

    /// Creates the single-line body shown when fetching failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_protocol::ArticleBody;
    ///
    /// let body = ArticleBody::placeholder(3);
    /// assert_eq!(body.len(), 1);
    /// ```
    #[must_use]
    pub fn placeholder(article_id: u64) -> Self {
        Self {
            article_id,
            lines: vec![BODY_UNAVAILABLE.to_string()],
        }
    }

    /// Number of logical lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when the body has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
