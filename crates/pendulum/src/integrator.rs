//! Explicit Euler integration of a damped simple pendulum.
//!
//! Each step computes the angular acceleration from the current angle and
//! velocity, then advances velocity and angle by one fixed time step:
//!
//! ```text
//! a  = -(g / L) · sin(θ) - c · ω
//! ω' = ω + a · dt
//! θ' = θ + ω' · dt
//! ```
//!
//! Damping is linear in the angular velocity. Angles are radians and are
//! never wrapped, so a pendulum started past the horizontal keeps its full
//! angle history.

use crate::config::{
    DEFAULT_DAMPING, DEFAULT_ROD_LENGTH, DEFAULT_TIME_STEP, EQUILIBRIUM_THRESHOLD, GRAVITY,
};
use crate::math::{abs, cos, sin};

/// Fixed physical parameters of the pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParams {
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Length of the rod.
    pub rod_length: f64,
    /// Linear damping coefficient.
    pub damping: f64,
    /// Time step per integration step.
    pub dt: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            rod_length: DEFAULT_ROD_LENGTH,
            damping: DEFAULT_DAMPING,
            dt: DEFAULT_TIME_STEP,
        }
    }
}

impl PendulumParams {
    /// Returns these parameters with a different damping coefficient.
    #[inline]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Returns these parameters with a different time step.
    #[inline]
    pub const fn with_time_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// The restoring coefficient `g / L`.
    #[inline]
    pub fn stiffness(&self) -> f64 {
        self.gravity / self.rod_length
    }
}

/// Thresholds below which the pendulum is considered at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumThresholds {
    /// Largest `|angle|` still counted as hanging straight down.
    pub angle: f64,
    /// Largest `|angular_velocity|` still counted as stationary.
    pub velocity: f64,
}

impl Default for EquilibriumThresholds {
    fn default() -> Self {
        Self {
            angle: EQUILIBRIUM_THRESHOLD,
            velocity: EQUILIBRIUM_THRESHOLD,
        }
    }
}

/// Angle, angular velocity and the acceleration used by the last step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendulumState {
    /// Angle from vertical, in radians. Positive swings right.
    pub angle: f64,
    /// Angular velocity in radians per second.
    pub angular_velocity: f64,
    /// Angular acceleration computed by the most recent step.
    pub angular_acceleration: f64,
}

impl PendulumState {
    /// A stationary pendulum hanging straight down.
    #[inline]
    pub const fn rest() -> Self {
        Self {
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }

    /// A stationary pendulum held at `angle` radians.
    #[inline]
    pub const fn at_angle(angle: f64) -> Self {
        Self {
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }

    /// Angular acceleration for the current angle and velocity.
    #[inline]
    pub fn acceleration(&self, params: &PendulumParams) -> f64 {
        -params.stiffness() * sin(self.angle) - params.damping * self.angular_velocity
    }

    /// Advances the pendulum by one time step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum::{PendulumParams, PendulumState};
    ///
    /// let params = PendulumParams::default().with_damping(0.0);
    /// let next = PendulumState::at_angle(0.5).step(&params);
    ///
    /// let expected = -(9.81 / 200.0) * 0.5_f64.sin();
    /// assert!((next.angular_acceleration - expected).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn step(&self, params: &PendulumParams) -> Self {
        let angular_acceleration = self.acceleration(params);
        let angular_velocity = self.angular_velocity + angular_acceleration * params.dt;
        let angle = self.angle + angular_velocity * params.dt;
        Self {
            angle,
            angular_velocity,
            angular_acceleration,
        }
    }

    /// Advances the pendulum in place and returns the new state.
    #[inline]
    pub fn advance(&mut self, params: &PendulumParams) -> Self {
        *self = self.step(params);
        *self
    }

    /// Whether both angle and velocity are inside the rest thresholds.
    #[inline]
    pub fn is_at_rest(&self, thresholds: &EquilibriumThresholds) -> bool {
        abs(self.angle) < thresholds.angle && abs(self.angular_velocity) < thresholds.velocity
    }

    /// Mechanical energy per unit `m·L²`: `½ω² - (g/L)·cos(θ)`.
    ///
    /// Constant for an undamped pendulum up to discretization error.
    #[inline]
    pub fn energy(&self, params: &PendulumParams) -> f64 {
        0.5 * self.angular_velocity * self.angular_velocity - params.stiffness() * cos(self.angle)
    }
}
