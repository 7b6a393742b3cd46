//! Live data providers for the dashboard.
//!
//! This crate implements [`DataProviders`](dashboard_protocol::DataProviders)
//! against the real world: the wttr.in weather service, the Hacker News
//! API, a text-mode browser for article bodies, `/proc/cpuinfo`, `pacman`
//! and Taskwarrior.
//!
//! # Overview
//!
//! - [`LiveProviders`]: the provider set injected into the dashboard
//! - [`client`]: HTTP client with a per-request deadline
//! - [`command`]: helper program execution with a deadline
//! - [`weather`], [`news`], [`system`], [`tasks`]: one module per source
//!
//! Every fetch is bounded by the configured `fetch_timeout_secs`. Failures
//! are logged with `tracing` and returned as
//! [`FetchError`](dashboard_protocol::FetchError); the dashboard renders a
//! placeholder instead.

pub mod client;
pub mod command;
pub mod error;
pub mod live;
pub mod news;
pub mod system;
pub mod tasks;
pub mod weather;

pub use client::HttpClient;
pub use error::{Error, Result};
pub use live::LiveProviders;
