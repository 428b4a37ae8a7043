#![forbid(unsafe_code)]

//! # pendulum-tui
//!
//! A terminal front end for the [`pendulum`] demo.
//!
//! The interactive mode draws the rod, bob and fading trail on a character
//! grid and maps keys onto the demo controls. The headless mode runs a fixed
//! number of frames on a simulated clock and prints a one-line summary,
//! which makes the binary scriptable.
//!
//! ## Usage
//!
//! ```bash
//! pendulum --angle 60
//! pendulum --headless --angle 30 --frames 600
//! ```

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod terminal;

pub use app::{Action, App};
pub use canvas::CharCanvas;
pub use cli::Cli;
pub use config::{FileConfig, Settings};
pub use error::{Error, Result};
pub use headless::Summary;
