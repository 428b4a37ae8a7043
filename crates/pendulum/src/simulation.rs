//! The simulation controller.
//!
//! [`Simulation`] owns every piece of mutable demo state in a single
//! [`SimulationState`] value together with the scheduler that keeps the loop
//! alive. Hosts forward user commands (start, reset, angle and damping
//! changes) and fired frames to it; nothing else mutates the state.
//!
//! # Equilibrium
//!
//! Reaching rest does not stop the loop. The elapsed-time readout freezes
//! at its last value while stepping and rendering continue, so the trail
//! keeps fading out behind the settled bob until the user resets.

use alloc::format;
use alloc::string::{String, ToString};

use tracing::{debug, trace, warn};

use crate::config::{ANGLE_RANGE_DEGREES, ConfigError, DAMPING_RANGE, SimulationConfig};
use crate::geometry::BobPosition;
use crate::integrator::{PendulumParams, PendulumState};
use crate::math::degrees_to_radians;
use crate::run::{RunControl, Timestamp, format_elapsed};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::Surface;
use crate::trail::TrailBuffer;

/// Readout shown before a run starts and after every reset.
const ELAPSED_AT_REST: &str = "0.0";

/// All mutable demo state.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Angle, velocity and last acceleration.
    pub pendulum: PendulumState,
    /// Integrator parameters, including the current damping.
    pub params: PendulumParams,
    /// Recently visited bob positions.
    pub trail: TrailBuffer,
    /// Run flags.
    pub run: RunControl,
    /// Where the bob is drawn.
    pub bob: BobPosition,
    /// Elapsed-time readout.
    pub elapsed_text: String,
    /// Angle control value, in degrees.
    pub angle_degrees: f64,
    /// Frames ticked since the last reset.
    pub ticks: u64,
}

impl SimulationState {
    fn initial(config: &SimulationConfig) -> Self {
        Self {
            pendulum: PendulumState::rest(),
            params: config.params(),
            trail: TrailBuffer::with_style(config.max_trail_length, config.trail_style()),
            run: RunControl::new(),
            bob: BobPosition::from_angle(0.0, config.rod_length, config.pivot_x()),
            elapsed_text: ELAPSED_AT_REST.to_string(),
            angle_degrees: 0.0,
            ticks: 0,
        }
    }
}

/// What a call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The simulation is idle; nothing happened.
    Idle,
    /// The frame is not the one currently pending (it was cancelled by a
    /// reset, or already ticked); nothing happened.
    Stale,
    /// The pendulum advanced one step and the next frame was requested.
    Advanced {
        /// Whether the pendulum is inside the rest thresholds after the step.
        at_rest: bool,
    },
}

/// Controller for the pendulum demo.
///
/// Generic over the [`FrameScheduler`] so tests and terminal hosts can pump
/// frames synchronously while browsers use `requestAnimationFrame`.
#[derive(Debug)]
pub struct Simulation<S> {
    config: SimulationConfig,
    state: SimulationState,
    scheduler: S,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> Simulation<S> {
    /// Creates an idle simulation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: SimulationConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimulationState::initial(&config);
        debug!(
            rod_length = config.rod_length,
            dt = config.dt,
            damping = config.damping,
            max_trail_length = config.max_trail_length,
            "simulation created"
        );
        Ok(Self {
            config,
            state,
            scheduler,
            pending: None,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that pump frames.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The frame the simulation is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.state.run.is_running()
    }

    /// Elapsed-time readout, one decimal place.
    pub fn elapsed_text(&self) -> &str {
        &self.state.elapsed_text
    }

    /// Angle control label, in degrees.
    pub fn angle_label(&self) -> String {
        format!("{}", self.state.angle_degrees)
    }

    /// Damping control label.
    pub fn damping_label(&self) -> String {
        format!("{}", self.state.params.damping)
    }

    /// Current damping coefficient.
    pub fn damping(&self) -> f64 {
        self.state.params.damping
    }

    /// Where the bob is and how far the rod is turned.
    pub fn bob(&self) -> BobPosition {
        self.state.bob
    }

    /// Starts the loop at `now`.
    ///
    /// Returns `false` without side effects if already running. Also
    /// returns `false`, leaving the simulation idle, if the scheduler cannot
    /// provide a first frame.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if !self.state.run.start(now) {
            trace!("start ignored, already running");
            return false;
        }
        let Some(frame) = self.scheduler.request_frame() else {
            self.state.run.reset();
            warn!("frame request failed, simulation not started");
            return false;
        };
        self.pending = Some(frame);
        debug!(
            angle = self.state.pendulum.angle,
            damping = self.state.params.damping,
            first_frame = frame.0,
            "simulation started"
        );
        true
    }

    /// Returns every piece of state to its initial value.
    ///
    /// Cancels the pending frame before anything else, so no tick can land
    /// on the cleared state. Damping and the angle control return to their
    /// defaults, the trail is emptied and `surface` is re-rendered (leaving
    /// it blank). Calling it repeatedly is harmless.
    pub fn reset<Sf: Surface + ?Sized>(&mut self, surface: &mut Sf) {
        self.state.run.reset();
        if let Some(frame) = self.pending.take() {
            self.scheduler.cancel_frame(frame);
            trace!(frame = frame.0, "cancelled pending frame");
        }
        self.state = SimulationState::initial(&self.config);
        self.state.trail.render(surface);
        debug!("simulation reset");
    }

    /// Sets the angle from the angle control, in degrees.
    ///
    /// Zeroes the velocity and moves the bob without advancing physics; the
    /// new bob position is recorded in the trail. Values outside 0–180 are
    /// clamped; non-finite values are ignored.
    pub fn set_angle_degrees(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            warn!(degrees, "ignoring non-finite angle");
            return;
        }
        let degrees = degrees.clamp(*ANGLE_RANGE_DEGREES.start(), *ANGLE_RANGE_DEGREES.end());
        self.state.angle_degrees = degrees;
        self.state.pendulum = PendulumState::at_angle(degrees_to_radians(degrees));
        self.update_bob();
        debug!(degrees, "angle set");
    }

    /// Sets the damping coefficient, clamped to 0–1; non-finite values are
    /// ignored.
    pub fn set_damping(&mut self, damping: f64) {
        if !damping.is_finite() {
            warn!(damping, "ignoring non-finite damping");
            return;
        }
        let damping = damping.clamp(*DAMPING_RANGE.start(), *DAMPING_RANGE.end());
        self.state.params.damping = damping;
        debug!(damping, "damping set");
    }

    /// Handles a fired frame.
    ///
    /// Steps the pendulum, records the new bob position, repaints the trail
    /// onto `surface`, refreshes the elapsed readout unless equilibrium has
    /// frozen it, and requests the next frame. Frames arriving while idle or
    /// that are not the pending frame are ignored. If the next frame cannot
    /// be requested the simulation returns to idle, keeping its readouts, so
    /// a later [`start`](Self::start) resumes the swing.
    pub fn tick<Sf: Surface + ?Sized>(
        &mut self,
        frame: FrameHandle,
        now: Timestamp,
        surface: &mut Sf,
    ) -> TickOutcome {
        if !self.state.run.is_running() {
            trace!(frame = frame.0, "tick ignored, idle");
            return TickOutcome::Idle;
        }
        if self.pending != Some(frame) {
            trace!(frame = frame.0, "tick ignored, stale frame");
            return TickOutcome::Stale;
        }
        self.pending = None;

        let pendulum = self.state.pendulum.advance(&self.state.params);
        self.state.ticks += 1;

        let at_rest = pendulum.is_at_rest(&self.config.thresholds);
        if at_rest && self.state.run.suppress_elapsed() {
            debug!(
                angle = pendulum.angle,
                angular_velocity = pendulum.angular_velocity,
                ticks = self.state.ticks,
                "pendulum reached equilibrium, elapsed time frozen"
            );
        }

        self.update_bob();
        self.state.trail.render(surface);

        if !self.state.run.elapsed_display_suppressed() {
            if let Some(secs) = self.state.run.elapsed_seconds(now) {
                self.state.elapsed_text = format_elapsed(secs);
            }
        }

        trace!(
            frame = frame.0,
            angle = pendulum.angle,
            angular_velocity = pendulum.angular_velocity,
            angular_acceleration = pendulum.angular_acceleration,
            "tick"
        );

        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            self.state.run.reset();
            warn!(ticks = self.state.ticks, "frame request failed, simulation stopped");
        }
        TickOutcome::Advanced { at_rest }
    }

    fn update_bob(&mut self) {
        self.state.bob = BobPosition::from_angle(
            self.state.pendulum.angle,
            self.config.rod_length,
            self.config.pivot_x(),
        );
        self.state.trail.push(self.state.bob.center);
    }
}
