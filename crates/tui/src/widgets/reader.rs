//! Article reader widget for the right pane.
//!
//! The body is kept as logical lines. At draw time each line is split into
//! chunks of at most `two_pane_width` characters and every chunk takes one
//! row, so the scroll offset counts logical lines while the visible row
//! budget counts chunks.

use ratatui::{
    buffer::Buffer,
    style::{Color, Style},
    widgets::{Clear, Widget},
};

use super::text::{put, vline, wrap_chunks};
use crate::geometry::ScreenGeometry;
use crate::state::max_scroll_offset;

/// Returns the rows the reader shows for `lines` starting at logical line
/// `scroll_offset`.
///
/// # Examples
///
/// ```
/// use dashboard_tui::geometry::ScreenGeometry;
/// use dashboard_tui::widgets::reader::visible_rows;
///
/// let geometry = ScreenGeometry::compute(40, 150).unwrap();
/// let lines = vec!["one".to_string(), "two".to_string(), "three".to_string()];
/// assert_eq!(visible_rows(&geometry, &lines, 1), vec!["two", "three"]);
/// ```
#[must_use]
pub fn visible_rows(
    geometry: &ScreenGeometry,
    lines: &[String],
    scroll_offset: usize,
) -> Vec<String> {
    let budget = usize::from(geometry.reader_visible_rows());
    let width = usize::from(geometry.two_pane_width);

    lines
        .iter()
        .skip(scroll_offset)
        .flat_map(|line| wrap_chunks(line, width))
        .take(budget)
        .collect()
}

/// Rows each logical line takes once wrapped to the pane width.
#[must_use]
pub fn row_counts(geometry: &ScreenGeometry, lines: &[String]) -> Vec<usize> {
    let width = usize::from(geometry.two_pane_width);
    lines
        .iter()
        .map(|line| wrap_chunks(line, width).len())
        .collect()
}

/// Largest scroll offset for `lines`: from there the wrapped tail of the
/// article fits the reader.
///
/// # Examples
///
/// ```
/// use dashboard_tui::geometry::ScreenGeometry;
/// use dashboard_tui::widgets::reader::last_scroll_offset;
///
/// let geometry = ScreenGeometry::compute(40, 160).unwrap();
/// let short: Vec<String> = (0..100).map(|n| n.to_string()).collect();
/// assert_eq!(last_scroll_offset(&geometry, &short), 63);
///
/// // Every line wraps to three rows, so only twelve fit.
/// let long = vec!["x".repeat(200); 60];
/// assert_eq!(last_scroll_offset(&geometry, &long), 48);
/// ```
#[must_use]
pub fn last_scroll_offset(geometry: &ScreenGeometry, lines: &[String]) -> usize {
    max_scroll_offset(
        &row_counts(geometry, lines),
        usize::from(geometry.reader_visible_rows()),
    )
}

/// Renders the article reader with a vertical rule on its left.
pub fn render_article_reader(
    geometry: &ScreenGeometry,
    lines: &[String],
    scroll_offset: usize,
    buf: &mut Buffer,
) {
    let area = geometry.reader_area().intersection(buf.area);
    Clear.render(area, buf);

    vline(
        buf,
        geometry.two_pane_width.saturating_sub(1),
        geometry.content_top(),
        geometry.bottom_row_height().saturating_sub(1),
        Style::default().fg(Color::DarkGray),
    );

    let style = Style::default().fg(Color::White);
    for (offset, row) in visible_rows(geometry, lines, scroll_offset)
        .iter()
        .enumerate()
    {
        // offset < reader_visible_rows, which is a u16
        put(
            buf,
            geometry.two_pane_width,
            geometry.content_top() + offset as u16,
            row,
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;
    use crate::test_utils::buffer_to_string;

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("line {n}")).collect()
    }

    #[test]
    fn rows_are_capped_by_visible_budget() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let rows = visible_rows(&geometry, &numbered(100), 0);
        assert_eq!(rows.len(), 37);
        assert_eq!(rows[0], "line 1");
        assert_eq!(rows[36], "line 37");
    }

    #[test]
    fn scroll_offset_skips_logical_lines() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let rows = visible_rows(&geometry, &numbered(100), 63);
        assert_eq!(rows.first().map(String::as_str), Some("line 64"));
        assert_eq!(rows.last().map(String::as_str), Some("line 100"));
    }

    #[test]
    fn long_lines_wrap_at_pane_width() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let lines = vec!["a".repeat(170), "tail".to_string()];
        let rows = visible_rows(&geometry, &lines, 0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 80);
        assert_eq!(rows[1].len(), 80);
        assert_eq!(rows[2].len(), 10);
    }

    #[test]
    fn wrapped_chunks_count_against_the_budget() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let lines = vec!["b".repeat(80 * 40)];
        assert_eq!(visible_rows(&geometry, &lines, 0).len(), 37);
    }

    #[test]
    fn tail_is_visible_from_last_offset() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let lines: Vec<String> = (1..=60)
            .map(|n| format!("L{n:02}{}", "x".repeat(197)))
            .collect();

        let last = last_scroll_offset(&geometry, &lines);
        assert_eq!(last, 48);

        let rows = visible_rows(&geometry, &lines, last);
        assert_eq!(rows.len(), 36);
        assert!(rows[0].starts_with("L49"));
        assert!(rows[33].starts_with("L60"));
        assert_eq!(rows.last().map(String::len), Some(40));
    }

    #[test]
    fn renders_in_right_pane_with_rule() {
        let geometry = ScreenGeometry::compute(40, 160).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 160, 40));
        render_article_reader(&geometry, &numbered(3), 0, &mut buf);

        let output = buffer_to_string(&buf);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[2], format!("{}│line 1", " ".repeat(79)));
        assert_eq!(lines[4], format!("{}│line 3", " ".repeat(79)));
        assert_eq!(lines[5], format!("{}│", " ".repeat(79)));
        assert_eq!(lines[38], format!("{}│", " ".repeat(79)));
        assert_eq!(lines[39], "");
    }
}
