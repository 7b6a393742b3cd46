//! Test utilities for the TUI crate.
//!
//! Helpers shared by the widget and application tests for turning rendered
//! buffers into text that can be compared or snapshotted.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row, with
/// trailing spaces trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        result.push_str(&row_text(buf, y));
        result.push('\n');
    }
    result
}

/// Returns the text of row `y`, trailing spaces trimmed.
#[must_use]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    let mut row = String::new();
    for x in buf.area.left()..buf.area.right() {
        if let Some(cell) = buf.cell((x, y)) {
            row.push_str(cell.symbol());
        }
    }
    row.trim_end_matches(' ').to_string()
}
