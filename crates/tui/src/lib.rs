//! Terminal UI for the dashboard application.
//!
//! This crate provides a Ratatui-based terminal interface showing the
//! weather, system status, news headlines, an article reader and pending
//! tasks in one screen.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`geometry`]: Pane dimensions derived from the terminal size
//! - [`state`]: Navigation state management
//! - [`widgets`]: Pane renderers
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use dashboard_config::Config;
//! use dashboard_protocol::dummy::DummyProviders;
//! use dashboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(DummyProviders::new(), Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod geometry;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use geometry::{LayoutError, ScreenGeometry};
pub use state::NavigationState;
