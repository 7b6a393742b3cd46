//! Headline list widget for the left pane.

use dashboard_protocol::ArticleRef;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::text::{put, truncate_chars};
use crate::geometry::ScreenGeometry;

/// Formats one headline row: `"<id> <title>"` cut to the pane's headline
/// width.
#[must_use]
pub fn headline_row(geometry: &ScreenGeometry, article: &ArticleRef) -> String {
    truncate_chars(
        &article.display_line(),
        usize::from(geometry.headline_width()),
    )
}

/// Number of headlines that are drawn, given how many are cached.
#[must_use]
pub fn visible_count(geometry: &ScreenGeometry, article_count: usize) -> usize {
    article_count.min(usize::from(geometry.article_capacity()))
}

/// Renders the headline list, highlighting `active_index`.
///
/// The headline rows are cleared first, so an empty list leaves an empty
/// pane.
pub fn render_article_list(
    geometry: &ScreenGeometry,
    articles: &[ArticleRef],
    active_index: usize,
    buf: &mut Buffer,
) {
    let area = geometry.article_list_area().intersection(buf.area);
    Clear.render(area, buf);

    let active_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let normal_style = Style::default().fg(Color::Gray);

    let count = visible_count(geometry, articles.len());
    for (index, article) in articles.iter().take(count).enumerate() {
        let style = if index == active_index {
            active_style
        } else {
            normal_style
        };
        // count <= article_capacity, which is a u16
        let row = geometry.content_top() + index as u16;
        put(buf, 0, row, &headline_row(geometry, article), style);
    }
}
