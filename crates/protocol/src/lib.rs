//! Shared protocol types for the dashboard application.
//!
//! This crate defines the types exchanged between the dashboard components:
//! article references and bodies, system and task records, the TUI message
//! enum, the error catalogue, and the [`DataProviders`] contract that the
//! live collaborators and the test fakes both implement.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`article`]: Article references and article bodies
//! - [`system`]: CPU summary and pending task records
//! - [`window`]: The pane/window kinds of the dashboard
//! - [`message`]: TUI event messages
//! - [`error`]: Error catalogue, severities and fetch errors
//! - [`provider`]: The data provider capability
//! - [`dummy`]: Canned providers for offline runs and tests
//!
//! # Examples
//!
//! ```
//! use dashboard_protocol::{ArticleRef, DashError, Severity};
//!
//! let article = ArticleRef::new(42, "Show HN: A dashboard", None);
//! assert_eq!(article.display_line(), "42 Show HN: A dashboard");
//!
//! let error = DashError::screen_too_small();
//! assert_eq!(error.code, 1001);
//! assert_eq!(error.severity, Severity::Critical);
//! ```

pub mod article;
pub mod dummy;
pub mod error;
pub mod message;
pub mod provider;
pub mod system;
pub mod window;

// Re-export primary types at crate root for convenience
pub use article::{ArticleBody, ArticleRef, NO_URL};
pub use error::{DashError, ErrorKind, FetchError, FetchResult, Severity};
pub use message::Message;
pub use provider::DataProviders;
pub use system::{PendingTask, SystemSummary};
pub use window::WindowKind;
