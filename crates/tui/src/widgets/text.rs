//! Text measuring and placement helpers shared by the widgets.

use ratatui::{buffer::Buffer, style::Style, text::Span};

/// Display width of `text` in terminal columns.
#[must_use]
pub fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Start column that centers `text` in `width` columns.
///
/// Text wider than `width` starts at column 0.
///
/// # Examples
///
/// ```
/// use dashboard_tui::widgets::text::center_offset;
///
/// assert_eq!(center_offset(120, "<== Dashboard: Error ==>"), 48);
/// assert_eq!(center_offset(10, "a very long line"), 0);
/// ```
#[must_use]
pub fn center_offset(width: u16, text: &str) -> u16 {
    width.saturating_sub(text_width(text)) / 2
}

/// Keeps at most `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Splits `line` into consecutive chunks of at most `width` characters.
///
/// An empty line yields one empty chunk, so blank lines keep their row.
///
/// # Examples
///
/// ```
/// use dashboard_tui::widgets::text::wrap_chunks;
///
/// assert_eq!(wrap_chunks("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert_eq!(wrap_chunks("", 3), vec![""]);
/// ```
#[must_use]
pub fn wrap_chunks(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() || width == 0 {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Writes `text` at `(x, y)`, clipped to the buffer.
///
/// Positions outside the buffer are skipped.
pub fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
        return;
    }
    buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
}

/// Draws a horizontal rule of `width` columns starting at `(x, y)`.
pub fn hline(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    let rule = "─".repeat(usize::from(width));
    put(buf, x, y, &rule, style);
}

/// Draws a vertical rule of `height` rows starting at `(x, y)`.
pub fn vline(buf: &mut Buffer, x: u16, y: u16, height: u16, style: Style) {
    for row in y..y.saturating_add(height) {
        put(buf, x, row, "│", style);
    }
}
