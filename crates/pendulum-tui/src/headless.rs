//! Running the demo without a terminal.
//!
//! Frames are pumped back to back on a simulated clock advancing one frame
//! interval per tick, so a run is fully deterministic.

use std::io::Write;

use pendulum::{TickOutcome, Timestamp, radians_to_degrees};
use tracing::info;

use crate::app::App;
use crate::config::Settings;
use crate::error::Result;

/// Grid size used for headless runs.
pub const HEADLESS_COLS: usize = 46;
/// Grid size used for headless runs.
pub const HEADLESS_ROWS: usize = 24;

/// Where a headless run ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Frames ticked.
    pub frames: u64,
    /// Elapsed-time readout after the last frame.
    pub elapsed: String,
    /// Final angle, in degrees.
    pub angle_degrees: f64,
    /// Final angular velocity.
    pub angular_velocity: f64,
    /// Trail points held after the last frame.
    pub trail_length: usize,
    /// First frame at which the pendulum was at rest, if any.
    pub settled_at: Option<u64>,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frames={} elapsed={} angle={:.4} velocity={:.6} trail={} settled=",
            self.frames, self.elapsed, self.angle_degrees, self.angular_velocity, self.trail_length,
        )?;
        match self.settled_at {
            Some(frame) => write!(f, "{frame}"),
            None => f.write_str("no"),
        }
    }
}

/// Simulates `settings.frames` frames and returns the summary, plus the
/// last composed frame.
///
/// # Errors
///
/// Returns an error if the simulation parameters are invalid.
#[allow(clippy::cast_precision_loss)]
pub fn simulate(settings: &Settings) -> Result<(Summary, Vec<String>)> {
    let mut app = App::new(settings, HEADLESS_COLS, HEADLESS_ROWS)?;
    let frame_ms = settings.frame_millis();
    let mut settled_at = None;

    app.start(Timestamp::from_millis(0.0));
    for frame in 1..=settings.frames {
        let now = Timestamp::from_millis(frame as f64 * frame_ms);
        if let Some(TickOutcome::Advanced { at_rest: true }) = app.pump(now) {
            settled_at.get_or_insert(frame);
        }
    }

    let sim = app.simulation();
    let summary = Summary {
        frames: sim.state().ticks,
        elapsed: sim.elapsed_text().to_string(),
        angle_degrees: radians_to_degrees(sim.state().pendulum.angle),
        angular_velocity: sim.state().pendulum.angular_velocity,
        trail_length: sim.state().trail.len(),
        settled_at,
    };
    info!(
        frames = summary.frames,
        elapsed = %summary.elapsed,
        settled_at = ?summary.settled_at,
        "headless run finished"
    );
    Ok((summary, app.view()))
}

/// Runs headless and writes the summary line (and the last frame if
/// requested) to `out`.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or `out` fails.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Summary> {
    let (summary, frame) = simulate(settings)?;
    writeln!(out, "{summary}")?;
    if settings.show_frame {
        for line in frame {
            writeln!(out, "{}", line.trim_end())?;
        }
    }
    Ok(summary)
}
