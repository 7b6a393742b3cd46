//! Screen geometry for the dashboard layout.
//!
//! The screen is split into a one-row top bar, a one-row separator, and a
//! bottom area holding two panes side by side. The left pane shows the
//! headlines above the task list; the right pane shows the article reader.
//!
//! ```text
//! row 0                [F1] Menu                    cpu  updates  weather
//! row 1                ──────────────────────────────────────────────────
//! row 2..task_start    headlines                  │ article text
//! task_start..         ─── Active Tasks ───       │
//! ```
//!
//! [`ScreenGeometry`] is recomputed on every resize before anything is
//! drawn.

use ratatui::layout::Rect;

/// Height of the top bar in rows.
pub const TOP_ROW_HEIGHT: u16 = 1;

/// Height of the separator under the top bar in rows.
pub const SPACER_HEIGHT: u16 = 1;

/// Minimum terminal width.
pub const REQUIRED_WIDTH: u16 = 120;

/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 40;

/// Minimum terminal width for showing the article reader next to the list.
pub const READER_MIN_WIDTH: u16 = 150;

/// Rows reserved at the bottom of the left pane for the task list.
pub const TASK_AREA_HEIGHT: u16 = 10;

/// Errors raised while computing the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The terminal is smaller than the minimum layout.
    #[error(
        "screen is {width}x{height}, the dashboard needs at least {REQUIRED_WIDTH}x{MIN_HEIGHT}"
    )]
    ScreenTooSmall {
        /// Detected width in columns.
        width: u16,
        /// Detected height in rows.
        height: u16,
    },
}

/// Pane dimensions derived from the terminal size.
///
/// All derived fields are computed together by [`ScreenGeometry::compute`].
///
/// # Examples
///
/// ```
/// use dashboard_tui::geometry::ScreenGeometry;
///
/// let geometry = ScreenGeometry::compute(40, 120).unwrap();
/// assert_eq!(geometry.two_pane_width, 60);
/// assert_eq!(geometry.bottom_row_height(), 38);
/// assert!(!geometry.shows_reader());
///
/// assert!(ScreenGeometry::compute(39, 120).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// Terminal height in rows.
    pub total_height: u16,
    /// Terminal width in columns.
    pub total_width: u16,
    /// Width of each of the two bottom panes.
    pub two_pane_width: u16,
    /// Height of the top bar.
    pub top_row_height: u16,
    /// Height of the separator under the top bar.
    pub spacer_height: u16,
    /// Height of the area below the top bar and separator.
    pub task_row_height: u16,
    /// Minimum terminal width.
    pub required_width: u16,
}

impl ScreenGeometry {
    /// Computes the geometry for a terminal of `screen_height` rows and
    /// `screen_width` columns.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ScreenTooSmall`] if the terminal is narrower
    /// than [`REQUIRED_WIDTH`] or shorter than [`MIN_HEIGHT`].
    pub fn compute(screen_height: u16, screen_width: u16) -> Result<Self, LayoutError> {
        if screen_width < REQUIRED_WIDTH || screen_height < MIN_HEIGHT {
            return Err(LayoutError::ScreenTooSmall {
                width: screen_width,
                height: screen_height,
            });
        }

        Ok(Self {
            total_height: screen_height,
            total_width: screen_width,
            two_pane_width: screen_width / 2,
            top_row_height: TOP_ROW_HEIGHT,
            spacer_height: SPACER_HEIGHT,
            task_row_height: screen_height - TOP_ROW_HEIGHT - SPACER_HEIGHT,
            required_width: REQUIRED_WIDTH,
        })
    }

    /// Computes the geometry for a terminal area.
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute).
    pub fn from_area(area: Rect) -> Result<Self, LayoutError> {
        Self::compute(area.height, area.width)
    }

    /// Width of one of `num_columns` equal columns across the full width.
    ///
    /// Zero columns yield 0.
    #[must_use]
    pub fn column_width(&self, num_columns: u16) -> u16 {
        Self::column_width_in(self.total_width, num_columns)
    }

    /// Width of one of `num_columns` equal columns across `area` columns.
    #[must_use]
    pub fn column_width_in(area: u16, num_columns: u16) -> u16 {
        area.checked_div(num_columns).unwrap_or(0)
    }

    /// Height of the area below the top bar and separator.
    #[must_use]
    pub fn bottom_row_height(&self) -> u16 {
        self.total_height - self.top_row_height - self.spacer_height
    }

    /// First row of the bottom area.
    #[must_use]
    pub fn content_top(&self) -> u16 {
        self.top_row_height + self.spacer_height
    }

    /// Rows of article text the reader shows at once.
    #[must_use]
    pub fn reader_visible_rows(&self) -> u16 {
        self.bottom_row_height() - self.spacer_height
    }

    /// Number of headlines that fit above the task list.
    #[must_use]
    pub fn article_capacity(&self) -> u16 {
        self.bottom_row_height() - TASK_AREA_HEIGHT
    }

    /// Row of the separator above the task list.
    #[must_use]
    pub fn task_start_row(&self) -> u16 {
        self.content_top() + self.article_capacity()
    }

    /// Returns `true` if the terminal is wide enough for the reader pane.
    #[must_use]
    pub fn shows_reader(&self) -> bool {
        self.total_width >= READER_MIN_WIDTH
    }

    /// Maximum characters of a headline line.
    #[must_use]
    pub fn headline_width(&self) -> u16 {
        self.two_pane_width - 5
    }

    /// The headline rows of the left pane.
    #[must_use]
    pub fn article_list_area(&self) -> Rect {
        Rect::new(
            0,
            self.content_top(),
            self.two_pane_width,
            self.article_capacity(),
        )
    }

    /// The task rows of the left pane, separator included.
    ///
    /// Stops one column short of the pane so the reader's rule survives.
    #[must_use]
    pub fn task_area(&self) -> Rect {
        Rect::new(
            0,
            self.task_start_row(),
            self.two_pane_width.saturating_sub(1),
            self.total_height - self.task_start_row(),
        )
    }

    /// The article text rows of the right pane.
    #[must_use]
    pub fn reader_area(&self) -> Rect {
        Rect::new(
            self.two_pane_width,
            self.content_top(),
            self.total_width - self.two_pane_width,
            self.reader_visible_rows(),
        )
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Valid screens split evenly and keep the two header rows.
        #[test]
        fn valid_screens_derive_consistently(
            width in REQUIRED_WIDTH..=400u16,
            height in MIN_HEIGHT..=200u16,
        ) {
            let g = ScreenGeometry::compute(height, width).expect("valid size");
            prop_assert_eq!(g.two_pane_width, width / 2);
            prop_assert_eq!(g.bottom_row_height(), height - 2);
            prop_assert_eq!(g.task_row_height, g.bottom_row_height());
            prop_assert!(g.task_start_row() < g.total_height);
            prop_assert_eq!(g.shows_reader(), width >= READER_MIN_WIDTH);
        }

        /// Anything below the floor is rejected.
        #[test]
        fn small_screens_are_rejected(width in 0..=400u16, height in 0..=200u16) {
            prop_assume!(width < REQUIRED_WIDTH || height < MIN_HEIGHT);
            let is_too_small = matches!(
                ScreenGeometry::compute(height, width),
                Err(LayoutError::ScreenTooSmall { .. })
            );
            prop_assert!(is_too_small);
        }
    }
}
