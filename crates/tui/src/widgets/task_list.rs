//! Pending task list under the headlines.

use dashboard_protocol::PendingTask;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::text::{center_offset, hline, put, truncate_chars};
use crate::geometry::ScreenGeometry;

/// Header of the task list.
pub const TASKS_HEADER: &str = "Active Tasks";

/// Renders the task list: a rule, a centered header and one row per task.
///
/// Tasks that do not fit in the remaining rows are not drawn.
pub fn render_task_list(geometry: &ScreenGeometry, tasks: &[PendingTask], buf: &mut Buffer) {
    let area = geometry.task_area();
    Clear.render(area.intersection(buf.area), buf);

    let start = area.y;
    let width = area.width;

    hline(buf, 0, start, width, Style::default().fg(Color::DarkGray));
    put(
        buf,
        center_offset(width, TASKS_HEADER),
        start + 1,
        TASKS_HEADER,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let first_row = start + 2;
    let max_chars = usize::from(geometry.headline_width());
    for (row, task) in (first_row..geometry.total_height).zip(tasks) {
        put(
            buf,
            0,
            row,
            &truncate_chars(&task.display_line(), max_chars),
            Style::default().fg(Color::Magenta),
        );
    }
}
