//! Runtime settings for the `pendulum` binary.
//!
//! Settings are resolved in three layers: the built-in defaults of
//! [`SimulationConfig`], then an optional TOML file, then command-line flags
//! (which also read `PENDULUM_*` environment variables).
//!
//! # Config file
//!
//! Every key is optional:
//!
//! ```toml
//! angle = 45.0
//! damping = 0.1
//! dt = 0.25
//! gravity = 9.81
//! rod_length = 200.0
//! max_trail_length = 75
//! decay_step = 0.05
//! fps = 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use pendulum::SimulationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Default frame rate of the interactive loop and the headless clock.
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Contents of a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Initial angle in degrees.
    pub angle: Option<f64>,
    /// Damping coefficient.
    pub damping: Option<f64>,
    /// Integration time step.
    pub dt: Option<f64>,
    /// Gravitational acceleration.
    pub gravity: Option<f64>,
    /// Rod length in simulation units.
    pub rod_length: Option<f64>,
    /// Trail capacity.
    pub max_trail_length: Option<usize>,
    /// Opacity removed per render pass.
    pub decay_step: Option<f64>,
    /// Frames per second.
    pub fps: Option<u32>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`] if the file cannot be read and
    /// [`Error::ParseConfig`] if it is not valid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Validated simulation parameters.
    pub simulation: SimulationConfig,
    /// Angle control value applied at startup, in degrees.
    pub initial_angle: f64,
    /// Frames per second.
    pub fps: u32,
    /// Whether to run without a terminal.
    pub headless: bool,
    /// Frames to simulate in headless mode.
    pub frames: u64,
    /// Print the last headless frame.
    pub show_frame: bool,
    /// Log file for interactive mode.
    pub log_file: Option<PathBuf>,
    /// Log verbosity (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Settings {
    /// Resolves settings from the command line, reading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the resolved
    /// parameters are invalid.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };
        Self::resolve(&file, cli)
    }

    /// Merges a parsed file with the command line and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] or [`Error::InvalidFps`] if validation
    /// fails.
    pub fn resolve(file: &FileConfig, cli: &Cli) -> Result<Self> {
        let mut simulation = SimulationConfig::default();
        if let Some(gravity) = file.gravity {
            simulation.gravity = gravity;
        }
        if let Some(rod_length) = file.rod_length {
            simulation = simulation.with_rod_length(rod_length).fit_surface_to_swing();
        }
        if let Some(decay_step) = file.decay_step {
            simulation.decay_step = decay_step;
        }
        if let Some(damping) = cli.damping.or(file.damping) {
            simulation = simulation.with_damping(damping);
        }
        if let Some(dt) = cli.dt.or(file.dt) {
            simulation = simulation.with_time_step(dt);
        }
        if let Some(capacity) = cli.trail_length.or(file.max_trail_length) {
            simulation = simulation.with_max_trail_length(capacity);
        }
        simulation.validate()?;

        let fps = cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS);
        if fps == 0 || fps > MAX_FPS {
            return Err(Error::InvalidFps(fps));
        }

        Ok(Self {
            simulation,
            initial_angle: cli.angle.or(file.angle).unwrap_or(0.0),
            fps,
            headless: cli.headless,
            frames: cli.frames,
            show_frame: cli.show_frame,
            log_file: cli.log_file.clone(),
            verbosity: cli.verbose,
        })
    }

    /// Milliseconds between frames.
    #[must_use]
    pub fn frame_millis(&self) -> f64 {
        1000.0 / f64::from(self.fps)
    }

    /// Default `tracing` filter for the verbosity level.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
