//! dashboard - A terminal dashboard for weather, news and system status.
//!
//! This is the main binary that launches the TUI application.

use std::fs::{self, File};
use std::sync::Mutex;

use dashboard_config::{Config, persistence};
use dashboard_protocol::dummy::DummyProviders;
use dashboard_providers::LiveProviders;
use dashboard_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// When set, the dashboard runs on canned data without network access.
const ENV_OFFLINE: &str = "DASHBOARD_OFFLINE";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::load_or_create()?;
    info!(?config, "configuration loaded");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let result = if std::env::var_os(ENV_OFFLINE).is_some() {
        info!("running offline with canned data");
        App::new(DummyProviders::new(), config)
            .run(&mut terminal)
            .await
    } else {
        let providers = LiveProviders::from_config(&config)?;
        App::new(providers, config).run(&mut terminal).await
    };

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends log output to the log file next to the config, since the
/// terminal belongs to the UI.
///
/// `RUST_LOG` selects the level, `info` by default.
fn init_logging() -> anyhow::Result<()> {
    let path = persistence::log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}
