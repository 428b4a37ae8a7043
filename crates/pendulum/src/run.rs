//! Run state and elapsed-time bookkeeping.

use alloc::format;
use alloc::string::String;

/// A monotonic instant supplied by the host, in milliseconds.
///
/// The origin is arbitrary (page load, program start); only differences
/// between timestamps are meaningful. Browser hosts pass the value handed to
/// their animation-frame callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Creates a timestamp from milliseconds.
    #[inline]
    pub const fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    /// Creates a timestamp from seconds.
    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        Self(secs * 1000.0)
    }

    /// The timestamp in milliseconds.
    #[inline]
    pub const fn as_millis(self) -> f64 {
        self.0
    }

    /// Seconds elapsed since `earlier`, never negative.
    #[inline]
    pub fn seconds_since(self, earlier: Self) -> f64 {
        ((self.0 - earlier.0) / 1000.0).max(0.0)
    }
}

/// Formats elapsed seconds the way the readout shows them: one decimal.
///
/// # Example
///
/// ```rust
/// use pendulum::format_elapsed;
///
/// assert_eq!(format_elapsed(0.0), "0.0");
/// assert_eq!(format_elapsed(12.34), "12.3");
/// ```
pub fn format_elapsed(secs: f64) -> String {
    format!("{:.1}", secs.max(0.0))
}

/// Whether the animation loop is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Nothing is scheduled. Initial state, and the state after a reset.
    #[default]
    Idle,
    /// Frames are being requested and ticked.
    Running,
}

/// Run flags for the loop and the elapsed-time readout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunControl {
    state: RunState,
    start_time: Option<Timestamp>,
    elapsed_display_suppressed: bool,
}

impl RunControl {
    /// An idle run control.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RunState::Idle,
            start_time: None,
            elapsed_display_suppressed: false,
        }
    }

    /// Current state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether the loop is running.
    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// When the current run started.
    pub const fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// Whether the elapsed readout has been frozen by equilibrium.
    pub const fn elapsed_display_suppressed(&self) -> bool {
        self.elapsed_display_suppressed
    }

    /// Starts a run at `now`.
    ///
    /// Returns `false` and changes nothing if already running.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = RunState::Running;
        self.start_time = Some(now);
        self.elapsed_display_suppressed = false;
        true
    }

    /// Returns to idle and forgets the run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Freezes the elapsed readout. Returns `true` the first time.
    pub fn suppress_elapsed(&mut self) -> bool {
        let first = !self.elapsed_display_suppressed;
        self.elapsed_display_suppressed = true;
        first
    }

    /// Seconds since the run started, or `None` when idle.
    pub fn elapsed_seconds(&self, now: Timestamp) -> Option<f64> {
        self.start_time.map(|start| now.seconds_since(start))
    }
}
