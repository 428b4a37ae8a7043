//! Command-line interface for the `pendulum` binary.
//!
//! # Examples
//!
//! ```bash
//! # Interactive terminal demo
//! pendulum
//!
//! # Start at 60 degrees with heavy damping
//! pendulum --angle 60 --damping 0.3
//!
//! # Run 600 frames without a terminal and print a summary
//! pendulum --headless --frames 600
//!
//! # Load parameters from a file, log to a file
//! pendulum --config pendulum.toml --log-file pendulum.log -vv
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Damped pendulum demo for the terminal.
///
/// Command-line flags override values from the config file, which override
/// the built-in defaults.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pendulum",
    author,
    version,
    about = "Damped pendulum demo with a fading trail",
    long_about = "Simulates a damped simple pendulum with explicit Euler integration \
                  and draws it, with a fading trail, in the terminal."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "PENDULUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial angle in degrees (0-180)
    #[arg(long, short = 'a', env = "PENDULUM_ANGLE")]
    pub angle: Option<f64>,

    /// Damping coefficient (0-1), also the value restored on reset
    #[arg(long, short = 'd', env = "PENDULUM_DAMPING")]
    pub damping: Option<f64>,

    /// Integration time step per frame
    #[arg(long, env = "PENDULUM_DT")]
    pub dt: Option<f64>,

    /// Maximum number of trail points
    #[arg(long, env = "PENDULUM_TRAIL_LENGTH")]
    pub trail_length: Option<usize>,

    /// Frames per second
    #[arg(long, env = "PENDULUM_FPS")]
    pub fps: Option<u32>,

    /// Run without a terminal and print a summary
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 600, env = "PENDULUM_FRAMES")]
    pub frames: u64,

    /// Print the last frame after the summary in headless mode
    #[arg(long, requires = "headless")]
    pub show_frame: bool,

    /// Write logs to this file in interactive mode
    #[arg(long, env = "PENDULUM_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["pendulum"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.angle.is_none());
        assert!(cli.damping.is_none());
        assert!(!cli.headless);
        assert_eq!(cli.frames, 600);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_physics_flags() {
        let cli = Cli::try_parse_from([
            "pendulum",
            "--angle",
            "45",
            "-d",
            "0.2",
            "--dt",
            "0.1",
            "--trail-length",
            "30",
            "--fps",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.angle, Some(45.0));
        assert_eq!(cli.damping, Some(0.2));
        assert_eq!(cli.dt, Some(0.1));
        assert_eq!(cli.trail_length, Some(30));
        assert_eq!(cli.fps, Some(30));
    }

    #[test]
    fn cli_parses_headless() {
        let cli =
            Cli::try_parse_from(["pendulum", "--headless", "--frames", "10", "--show-frame"])
                .unwrap();
        assert!(cli.headless);
        assert!(cli.show_frame);
        assert_eq!(cli.frames, 10);
    }

    #[test]
    fn cli_show_frame_requires_headless() {
        assert!(Cli::try_parse_from(["pendulum", "--show-frame"]).is_err());
    }

    #[test]
    fn cli_parses_verbose() {
        let cli = Cli::try_parse_from(["pendulum", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_rejects_non_numeric_angle() {
        assert!(Cli::try_parse_from(["pendulum", "--angle", "steep"]).is_err());
    }
}
