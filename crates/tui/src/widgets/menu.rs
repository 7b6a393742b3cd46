//! Modal menu widget.
//!
//! The menu replaces the whole screen while it is open. It shows the exit
//! hint in the top-left corner and a key reference panel in the middle.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::text::put;

/// Hint drawn at row 1, column 1.
pub const MENU_TITLE: &str = "Menu Opened! Press 'q' to exit this menu.";

/// The width of the key reference panel.
const KEYS_WIDTH: u16 = 44;

/// The height of the key reference panel.
const KEYS_HEIGHT: u16 = 18;

/// Renders the menu over `area`.
///
/// # Layout
///
/// ```text
///  Menu Opened! Press 'q' to exit this menu.
///
///            ╭── Keys ─────────────────────────╮
///            │  Headlines                      │
///            │  ↑ / k       Previous headline  │
///            │  ...                            │
///            ╰─────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use dashboard_tui::widgets::render_menu;
///
/// let area = Rect::new(0, 0, 120, 40);
/// let mut buf = Buffer::empty(area);
///
/// render_menu(area, &mut buf);
/// ```
pub fn render_menu(area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    Clear.render(area, buf);

    put(
        buf,
        area.x + 1,
        area.y + 1,
        MENU_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let panel_area = centered_rect(KEYS_WIDTH, KEYS_HEIGHT, area);

    let block = Block::default()
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_key_lines())
        .block(block)
        .alignment(Alignment::Left)
        .render(panel_area, buf);
}

/// Builds the lines of the key reference.
fn build_key_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<13}"), key_style),
            Span::styled(text, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Headlines", header_style)),
        entry("↑ / k", "Previous headline"),
        entry("↓ / j", "Next headline"),
        entry("→ / l / Enter", "Open in reader"),
        Line::from(""),
        Line::from(Span::styled("  Reader", header_style)),
        entry("↑ / k", "Scroll up"),
        entry("↓ / j", "Scroll down"),
        entry("Ctrl+N", "Next article"),
        entry("Ctrl+P", "Previous article"),
        entry("← / h", "Back to headlines"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        entry("r", "Refresh everything"),
        entry("q / Ctrl+C", "Quit"),
    ]
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
