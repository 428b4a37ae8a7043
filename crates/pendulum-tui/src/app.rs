//! The interactive demo: key bindings, frame pumping and the view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pendulum::{FrameQueue, Point, Simulation, TickOutcome, Timestamp, radians_to_degrees};
use tracing::debug;

use crate::canvas::CharCanvas;
use crate::config::Settings;
use crate::error::Result;

/// Degrees added or removed by one press of the angle keys.
pub const ANGLE_STEP_DEGREES: f64 = 5.0;

/// Damping added or removed by one press of the damping keys.
pub const DAMPING_STEP: f64 = 0.01;

/// Key reference shown under the pendulum.
pub const HELP_LINE: &str = "s/space start  r reset  \u{2190}/\u{2192} angle  \u{2193}/\u{2191} damping  q quit";

/// Lines below the grid: readouts and help.
pub const STATUS_LINES: usize = 2;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// A simulation bound to a character grid.
#[derive(Debug)]
pub struct App {
    sim: Simulation<FrameQueue>,
    canvas: CharCanvas,
}

impl App {
    /// Creates the app with a `cols` x `rows` grid and applies the initial
    /// angle from `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the simulation parameters are invalid.
    pub fn new(settings: &Settings, cols: usize, rows: usize) -> Result<Self> {
        let mut sim = Simulation::new(settings.simulation.clone(), FrameQueue::new())?;
        if settings.initial_angle != 0.0 {
            sim.set_angle_degrees(settings.initial_angle);
        }
        let canvas = CharCanvas::for_config(cols, rows, &settings.simulation);
        Ok(Self { sim, canvas })
    }

    /// The simulation.
    #[must_use]
    pub const fn simulation(&self) -> &Simulation<FrameQueue> {
        &self.sim
    }

    /// The trail grid.
    #[must_use]
    pub const fn canvas(&self) -> &CharCanvas {
        &self.canvas
    }

    /// Starts the pendulum; `false` if it was already running.
    pub fn start(&mut self, now: Timestamp) -> bool {
        self.sim.start(now)
    }

    /// Fits the grid to a terminal of `cols` x `rows`, keeping room for the
    /// status lines.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let rows = usize::from(rows).saturating_sub(STATUS_LINES);
        self.canvas.resize(usize::from(cols), rows);
        debug!(cols, rows, "canvas resized");
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Timestamp) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('s' | ' ') => {
                self.start(now);
            }
            KeyCode::Char('r') => self.sim.reset(&mut self.canvas),
            KeyCode::Left => self.nudge_angle(-ANGLE_STEP_DEGREES),
            KeyCode::Right => self.nudge_angle(ANGLE_STEP_DEGREES),
            KeyCode::Down => self.nudge_damping(-DAMPING_STEP),
            KeyCode::Up => self.nudge_damping(DAMPING_STEP),
            _ => {}
        }
        Action::Continue
    }

    fn nudge_angle(&mut self, delta: f64) {
        let degrees = self.sim.state().angle_degrees + delta;
        self.sim.set_angle_degrees(degrees);
    }

    fn nudge_damping(&mut self, delta: f64) {
        // Keep the label on the hundredths grid
        let damping = ((self.sim.damping() + delta) * 100.0).round() / 100.0;
        self.sim.set_damping(damping);
    }

    /// Ticks every frame that was due before this call.
    ///
    /// Frames requested by those ticks wait for the next pump, so each call
    /// advances a running pendulum exactly once.
    pub fn pump(&mut self, now: Timestamp) -> Option<TickOutcome> {
        let due = self.sim.scheduler().pending_count();
        let mut last = None;
        for _ in 0..due {
            let Some(frame) = self.sim.scheduler_mut().next_frame() else {
                break;
            };
            last = Some(self.sim.tick(frame, now, &mut self.canvas));
        }
        last
    }

    /// The status line: angle, damping, elapsed time and run state.
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = if self.sim.is_running() { "running" } else { "idle" };
        format!(
            "angle {}\u{b0}  damping {}  elapsed {}s  swing {:.1}\u{b0}  [{state}]",
            self.sim.angle_label(),
            self.sim.damping_label(),
            self.sim.elapsed_text(),
            radians_to_degrees(self.sim.state().pendulum.angle),
        )
    }

    /// The full screen: grid with the pendulum, then the status lines.
    #[must_use]
    pub fn view(&self) -> Vec<String> {
        let pivot = Point::new(self.sim.config().pivot_x(), 0.0);
        let mut lines = self.canvas.compose(pivot, &self.sim.bob());
        lines.push(self.status_line());
        lines.push(HELP_LINE.to_string());
        lines
    }
}
