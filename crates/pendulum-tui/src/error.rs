//! Error types for the terminal front end.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while configuring or running the terminal demo.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Usually means stdin is not a TTY. Use `--headless` instead.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreen {
        /// Whether we were trying to enter or exit the alternate screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to draw a frame.
    #[error("failed to render frame: {0}")]
    Render(io::Error),

    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        /// Path given with `--config`.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        /// Path given with `--config`.
        path: PathBuf,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The resolved simulation parameters were rejected.
    #[error("invalid simulation parameters: {0}")]
    Config(#[from] pendulum::ConfigError),

    /// The frame rate is outside the supported range.
    #[error("fps must be between 1 and 240, got {0}")]
    InvalidFps(u32),
}

/// A specialized [`Result`] type for the terminal front end.
pub type Result<T> = std::result::Result<T, Error>;
