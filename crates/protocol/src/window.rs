//! Window kinds of the dashboard.

use serde::{Deserialize, Serialize};

/// The pane (or modal) that currently owns the keyboard.
///
/// Exactly one window is active at a time. `TopBar` is only the initial
/// state and is replaced by `ArticleList` after the first full render; the
/// `Task` pane is display-only and never receives focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// The header row. Initial state before the first render.
    #[default]
    TopBar,
    /// The headline list in the left pane.
    ArticleList,
    /// The article reader in the right pane.
    ArticleReader,
    /// The pending task list under the headlines.
    Task,
    /// The full-screen modal menu.
    Menu,
}

impl WindowKind {
    /// Returns `true` for windows that accept navigation keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_protocol::WindowKind;
    ///
    /// assert!(WindowKind::ArticleList.is_navigable());
    /// assert!(!WindowKind::TopBar.is_navigable());
    /// ```
    #[must_use]
    pub const fn is_navigable(self) -> bool {
        matches!(self, Self::ArticleList | Self::ArticleReader)
    }
}
