//! Navigation state management.
//!
//! This module defines [`NavigationState`], which tracks the active window,
//! the selected headline, the reader scroll position and the bookkeeping
//! counters. Only the controller mutates it, except for the cursor position
//! the renderer records after each draw.

use dashboard_protocol::WindowKind;

/// The navigation state of a dashboard session.
///
/// # Invariants
///
/// `scroll_offset` stays within `[0, max_offset]` for the loaded article,
/// where `max_offset` is the first logical line from which the rest of the
/// article fits the reader (see [`max_scroll_offset`]). Every
/// scroll-changing method takes that bound and enforces it.
///
/// # Examples
///
/// ```
/// use dashboard_protocol::WindowKind;
/// use dashboard_tui::NavigationState;
///
/// let mut nav = NavigationState::new();
/// assert_eq!(nav.active_window, WindowKind::TopBar);
///
/// nav.focus(WindowKind::ArticleReader);
/// assert!(nav.scroll_down(63));
/// assert_eq!(nav.scroll_offset, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// The window that owns the keyboard.
    pub active_window: WindowKind,
    /// Last cursor position `(row, col)` recorded by the renderer.
    pub cursor_position: (u16, u16),
    /// First logical article line shown by the reader.
    pub scroll_offset: usize,
    /// Back/forward bookkeeping: up moves add one, down moves subtract one.
    pub depth_counter: i32,
    /// Index of the selected headline.
    pub current_article_index: usize,
    /// Window to return to when the menu closes.
    menu_return: Option<WindowKind>,
}

/// Largest valid scroll offset for lines taking `row_counts` rows each in
/// a reader of `visible_rows` rows.
///
/// The result is the first logical line from which every remaining line
/// fits, so the last line of the article is reachable. A last line taller
/// than the reader is still reachable on its own.
///
/// # Examples
///
/// ```
/// use dashboard_tui::state::max_scroll_offset;
///
/// assert_eq!(max_scroll_offset(&[1; 100], 37), 63);
/// assert_eq!(max_scroll_offset(&[1; 10], 37), 0);
/// // Three rows per line: twelve lines fill 36 rows.
/// assert_eq!(max_scroll_offset(&[3; 60], 37), 48);
/// ```
#[must_use]
pub fn max_scroll_offset(row_counts: &[usize], visible_rows: usize) -> usize {
    let mut used = 0;
    let mut first = row_counts.len();
    for (index, rows) in row_counts.iter().enumerate().rev() {
        used += rows;
        if used > visible_rows {
            break;
        }
        first = index;
    }
    first.min(row_counts.len().saturating_sub(1))
}

impl NavigationState {
    /// Creates the initial state: top bar active, first headline selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `window` the active window.
    ///
    /// Entering the reader resets the scroll position.
    pub fn focus(&mut self, window: WindowKind) {
        if window == WindowKind::ArticleReader {
            self.scroll_offset = 0;
        }
        self.active_window = window;
    }

    /// Returns `true` if the modal menu is open.
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.active_window == WindowKind::Menu
    }

    /// Opens the modal menu, remembering the active window.
    ///
    /// Opening an already open menu does nothing.
    pub fn open_menu(&mut self) {
        if self.is_menu_open() {
            return;
        }
        self.menu_return = Some(self.active_window);
        self.active_window = WindowKind::Menu;
    }

    /// Closes the modal menu and restores the previous window.
    ///
    /// Returns `false` if the menu was not open.
    pub fn close_menu(&mut self) -> bool {
        if !self.is_menu_open() {
            return false;
        }
        self.active_window = self.menu_return.take().unwrap_or(WindowKind::ArticleList);
        true
    }

    /// Moves the selection up one headline.
    ///
    /// Returns `false` at the first headline.
    pub fn select_previous(&mut self) -> bool {
        if self.current_article_index == 0 {
            return false;
        }
        self.current_article_index -= 1;
        self.depth_counter += 1;
        true
    }

    /// Moves the selection down one headline out of `visible_count`.
    ///
    /// Returns `false` at the last visible headline.
    pub fn select_next(&mut self, visible_count: usize) -> bool {
        if self.current_article_index + 1 >= visible_count {
            return false;
        }
        self.current_article_index += 1;
        self.depth_counter -= 1;
        true
    }

    /// Advances to the next article out of `visible_count` (Ctrl+N).
    ///
    /// Unlike [`select_next`](Self::select_next) this counts as a forward
    /// step. Returns `false` at the last visible headline.
    pub fn next_article(&mut self, visible_count: usize) -> bool {
        if self.current_article_index + 1 >= visible_count {
            return false;
        }
        self.current_article_index += 1;
        self.depth_counter += 1;
        true
    }

    /// Goes back to the previous article (Ctrl+P).
    ///
    /// Returns `false` at the first headline.
    pub fn previous_article(&mut self) -> bool {
        if self.current_article_index == 0 {
            return false;
        }
        self.current_article_index -= 1;
        self.depth_counter -= 1;
        true
    }

    /// Keeps the selection inside `visible_count` headlines.
    pub fn clamp_selection(&mut self, visible_count: usize) {
        self.current_article_index = self
            .current_article_index
            .min(visible_count.saturating_sub(1));
    }

    /// Scrolls the reader up one line.
    ///
    /// Returns `false` at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_offset == 0 {
            return false;
        }
        self.scroll_offset -= 1;
        true
    }

    /// Scrolls the reader down one line, up to `max_offset`.
    ///
    /// Returns `false` once the last line is visible.
    pub fn scroll_down(&mut self, max_offset: usize) -> bool {
        if self.scroll_offset >= max_offset {
            self.clamp_scroll(max_offset);
            return false;
        }
        self.scroll_offset += 1;
        true
    }

    /// Pulls the scroll offset back to at most `max_offset` after the
    /// article or the screen size changed.
    pub fn clamp_scroll(&mut self, max_offset: usize) {
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Records where the renderer left the cursor.
    pub fn record_cursor(&mut self, position: (u16, u16)) {
        self.cursor_position = position;
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The scroll offset stays in range after any up/down sequence.
        #[test]
        fn scroll_offset_stays_in_range(
            row_counts in proptest::collection::vec(1usize..5, 0..300),
            visible_rows in 1usize..100,
            moves in proptest::collection::vec(any::<bool>(), 0..400),
        ) {
            let max = max_scroll_offset(&row_counts, visible_rows);
            let mut nav = NavigationState::new();
            nav.focus(WindowKind::ArticleReader);
            for down in moves {
                if down {
                    nav.scroll_down(max);
                } else {
                    nav.scroll_up();
                }
                prop_assert!(nav.scroll_offset <= max);
            }
        }

        /// From the bound, everything left fits, or only one line is left.
        #[test]
        fn tail_fits_from_max_offset(
            row_counts in proptest::collection::vec(1usize..5, 1..300),
            visible_rows in 1usize..100,
        ) {
            let max = max_scroll_offset(&row_counts, visible_rows);
            let tail: usize = row_counts[max..].iter().sum();
            prop_assert!(tail <= visible_rows || max == row_counts.len() - 1);
            if max > 0 {
                prop_assert!(tail + row_counts[max - 1] > visible_rows);
            }
        }

        /// The selection stays inside the visible headlines.
        #[test]
        fn selection_stays_in_range(
            visible_count in 1usize..60,
            moves in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut nav = NavigationState::new();
            for down in moves {
                if down {
                    nav.select_next(visible_count);
                } else {
                    nav.select_previous();
                }
                prop_assert!(nav.current_article_index < visible_count);
            }
        }
    }
}
