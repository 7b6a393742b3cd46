//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application controller.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions or terminal events.
///
/// These messages are produced by the input handler and consumed by the
/// controller, which applies the transition table of the active window.
///
/// # Examples
///
/// ```
/// use dashboard_protocol::Message;
///
/// let msg = Message::NavigateDown;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Up arrow or `k`: previous headline, or scroll the reader up.
    NavigateUp,
    /// Down arrow or `j`: next headline, or scroll the reader down.
    NavigateDown,
    /// Ctrl+N (key code 14): open the next article.
    NextArticle,
    /// Ctrl+P (key code 16): open the previous article.
    PreviousArticle,
    /// Left arrow or `h`: move focus back to the headline list.
    FocusList,
    /// Right arrow, `l` or Enter: open the selected headline in the reader.
    OpenSelected,
    /// F1: open the modal menu.
    OpenMenu,
    /// `r`: drop cached data and refetch every pane.
    Refresh,
    /// `q`: quit, or close the menu when it is open.
    Quit,
    /// Ctrl+C: quit from any state, including the menu.
    Interrupt,
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_protocol::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(Message::NextArticle.is_navigation());
    /// assert!(!Message::Refresh.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateUp
                | Self::NavigateDown
                | Self::NextArticle
                | Self::PreviousArticle
                | Self::FocusList
                | Self::OpenSelected
        )
    }

    /// Returns `true` if this message may terminate the application.
    ///
    /// Inside the modal menu [`Quit`](Self::Quit) closes the menu instead;
    /// [`Interrupt`](Self::Interrupt) always quits.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::OpenMenu.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit | Self::Interrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(Message::NextArticle.is_navigation());
        assert!(Message::PreviousArticle.is_navigation());
        assert!(Message::FocusList.is_navigation());
        assert!(Message::OpenSelected.is_navigation());
        assert!(!Message::OpenMenu.is_navigation());
        assert!(!Message::Quit.is_navigation());
        assert!(
            !Message::Resize {
                width: 120,
                height: 40
            }
            .is_navigation()
        );
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(Message::Interrupt.is_terminating());
        assert!(!Message::Refresh.is_terminating());
        assert!(!Message::NavigateUp.is_terminating());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NextArticle).expect("serialize");
        assert_eq!(json, r#""next_article""#);

        let json = serde_json::to_string(&Message::Resize {
            width: 200,
            height: 50,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"resize":{"width":200,"height":50}}"#);
    }
}
