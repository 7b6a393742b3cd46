//! Snapshot tests for widget rendering.
//!
//! These tests use insta to capture and verify the visual output of widgets.

use dashboard_protocol::{ArticleRef, DashError, PendingTask, SystemSummary};
use ratatui::{buffer::Buffer, layout::Rect};

use super::{
    render_article_list, render_article_reader, render_error_screen, render_task_list,
    render_top_bar,
};
use crate::geometry::ScreenGeometry;
use crate::test_utils::buffer_to_string;

#[test]
fn snapshot_top_bar() {
    let geometry = ScreenGeometry::compute(40, 120).unwrap();
    let mut buf = Buffer::empty(Rect::new(0, 0, 120, 2));
    let cpu = SystemSummary::new("Toy CPU", 4, 1000);

    render_top_bar(
        &geometry,
        "Paris: +12C",
        Some(3),
        &cpu.summary_line(),
        &mut buf,
    );

    insta::assert_snapshot!("top_bar", buffer_to_string(&buf));
}

#[test]
fn snapshot_error_screen() {
    let area = Rect::new(0, 0, 60, 6);
    let mut buf = Buffer::empty(area);

    render_error_screen(&DashError::screen_too_small(), area, &mut buf);

    insta::assert_snapshot!("error_screen", buffer_to_string(&buf));
}

#[test]
fn panes_do_not_overlap() {
    let geometry = ScreenGeometry::compute(40, 160).unwrap();
    let area = Rect::new(0, 0, 160, 40);
    let mut buf = Buffer::empty(area);

    let articles: Vec<ArticleRef> = (1..=40)
        .map(|id| ArticleRef::new(id, "y".repeat(120), None))
        .collect();
    let body: Vec<String> = (1..=60).map(|n| "z".repeat(n)).collect();
    let tasks = vec![PendingTask::new(1, "t".repeat(200))];

    render_top_bar(&geometry, "weather", Some(1), "cpu", &mut buf);
    render_article_list(&geometry, &articles, 0, &mut buf);
    render_task_list(&geometry, &tasks, &mut buf);
    render_article_reader(&geometry, &body, 0, &mut buf);

    // Nothing from the left pane reaches the rule column or beyond.
    for y in geometry.content_top()..geometry.total_height {
        for x in geometry.two_pane_width..geometry.total_width {
            assert_ne!(buf[(x, y)].symbol(), "y", "headline leaked at ({x}, {y})");
            assert_ne!(buf[(x, y)].symbol(), "t", "task leaked at ({x}, {y})");
        }
    }
    // The reader never writes into the left pane.
    for y in 0..geometry.total_height {
        for x in 0..geometry.two_pane_width {
            assert_ne!(buf[(x, y)].symbol(), "z", "reader leaked at ({x}, {y})");
        }
    }
}
