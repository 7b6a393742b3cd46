//! Full-screen error view.
//!
//! The error screen replaces everything else. It works on the raw terminal
//! area because it is shown precisely when no [`ScreenGeometry`] can be
//! computed.
//!
//! [`ScreenGeometry`]: crate::geometry::ScreenGeometry

use dashboard_protocol::{DashError, Severity};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::text::{center_offset, put};

/// Title on the first row.
pub const ERROR_TITLE: &str = "<== Dashboard: Error ==>";

/// Footer on the last row.
pub const ERROR_FOOTER: &str = "Press 'q' to exit.";

/// Returns the style of the status line for `severity`.
///
/// Each severity has its own treatment.
#[must_use]
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Severity::Error => Style::default().fg(Color::LightRed),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Info => Style::default().add_modifier(Modifier::ITALIC),
    }
}

/// Renders the error screen for `error` over `area`.
pub fn render_error_screen(error: &DashError, area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    Clear.render(area, buf);
    if area.is_empty() {
        return;
    }

    put(
        buf,
        area.x + center_offset(area.width, ERROR_TITLE),
        area.y,
        ERROR_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let status = error.status_line();
    put(
        buf,
        area.x + center_offset(area.width, &status),
        area.y + 1,
        &status,
        severity_style(error.severity),
    );

    put(
        buf,
        area.x + 1,
        area.bottom() - 1,
        ERROR_FOOTER,
        Style::default(),
    );
}
