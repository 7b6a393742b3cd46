//! Top bar widget.
//!
//! Row 0 holds the menu hint on the left and, flush right, the CPU summary,
//! the pending update count and the weather report separated by fixed gaps.
//! Row 1 is a horizontal rule.

use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
};

use super::text::{hline, put, text_width};
use crate::geometry::ScreenGeometry;

/// Menu hint at the left edge.
pub const MENU_HINT: &str = "[F1] Menu";

/// Columns between the items of the right-hand cluster.
pub const CLUSTER_GAP: u16 = 5;

/// Formats the pending update count.
///
/// # Examples
///
/// ```
/// use dashboard_tui::widgets::top_bar::updates_label;
///
/// assert_eq!(updates_label(Some(4)), "Updates: 4");
/// assert_eq!(updates_label(None), "Updates: N/A");
/// ```
#[must_use]
pub fn updates_label(update_count: Option<u32>) -> String {
    match update_count {
        Some(count) => format!("Updates: {count}"),
        None => format!("Updates: {}", dashboard_protocol::system::NOT_AVAILABLE),
    }
}

/// Renders the top bar and the separator under it.
pub fn render_top_bar(
    geometry: &ScreenGeometry,
    weather_text: &str,
    update_count: Option<u32>,
    cpu_summary: &str,
    buf: &mut Buffer,
) {
    let width = geometry.total_width;
    let updates = updates_label(update_count);

    put(
        buf,
        0,
        0,
        MENU_HINT,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let weather_x = width.saturating_sub(text_width(weather_text));
    let updates_x = weather_x.saturating_sub(CLUSTER_GAP + text_width(&updates));
    let cpu_x = updates_x.saturating_sub(CLUSTER_GAP + text_width(cpu_summary));

    put(buf, cpu_x, 0, cpu_summary, Style::default().fg(Color::Green));
    put(buf, updates_x, 0, &updates, Style::default().fg(Color::Yellow));
    put(buf, weather_x, 0, weather_text, Style::default());

    hline(
        buf,
        0,
        geometry.top_row_height,
        width,
        Style::default().fg(Color::DarkGray),
    );
}
