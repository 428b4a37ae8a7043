#![forbid(unsafe_code)]

//! # pendulum
//!
//! Damped pendulum demo for the terminal.
//!
//! ```bash
//! cargo run -p pendulum-tui -- --angle 60
//! cargo run -p pendulum-tui -- --headless --frames 600
//! ```

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use pendulum_tui::{Cli, Settings, headless, terminal};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::load(&cli).context("failed to load settings")?;
    init_logging(&settings)?;

    if settings.headless {
        let mut stdout = io::stdout().lock();
        headless::run(&settings, &mut stdout).context("headless run failed")?;
    } else {
        terminal::run(&settings).context("terminal session failed")?;
    }
    Ok(())
}

/// Installs the `tracing` subscriber.
///
/// Headless runs log to stderr. Interactive runs log only to `--log-file`,
/// since anything written to the terminal would corrupt the screen.
fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    if settings.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else if let Some(path) = &settings.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}
