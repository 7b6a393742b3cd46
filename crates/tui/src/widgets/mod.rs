//! Widget components for the dashboard TUI.
//!
//! Each widget is a function that draws one pane into a [`Buffer`] from a
//! [`ScreenGeometry`] and the data it shows. Widgets never fetch data and
//! never touch navigation state, which keeps them easy to test against a
//! bare buffer.
//!
//! # Modules
//!
//! - [`top_bar`]: menu hint, CPU summary, update count and weather
//! - [`article_list`]: the headline list in the left pane
//! - [`reader`]: the article text in the right pane
//! - [`task_list`]: pending tasks under the headlines
//! - [`error_screen`]: the full-screen error view
//! - [`menu`]: the full-screen modal menu
//! - [`text`]: measuring, truncation, wrapping and placement helpers
//!
//! # Example
//!
//! ```
//! use dashboard_protocol::ArticleRef;
//! use dashboard_tui::geometry::ScreenGeometry;
//! use dashboard_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let geometry = ScreenGeometry::compute(40, 120).unwrap();
//! let mut buf = Buffer::empty(Rect::new(0, 0, 120, 40));
//!
//! let articles = vec![ArticleRef::new(1, "Example headline", None)];
//! widgets::render_article_list(&geometry, &articles, 0, &mut buf);
//! ```
//!
//! [`Buffer`]: ratatui::buffer::Buffer
//! [`ScreenGeometry`]: crate::geometry::ScreenGeometry

pub mod article_list;
pub mod error_screen;
pub mod menu;
pub mod reader;
pub mod task_list;
pub mod text;
pub mod top_bar;

// Re-export primary rendering functions for convenience
pub use article_list::render_article_list;
pub use error_screen::render_error_screen;
pub use menu::render_menu;
pub use reader::render_article_reader;
pub use task_list::render_task_list;
pub use top_bar::render_top_bar;

#[cfg(test)]
mod tests;
