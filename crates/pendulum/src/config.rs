//! Simulation constants and validated configuration.

use core::ops::RangeInclusive;

use crate::integrator::{EquilibriumThresholds, PendulumParams};
use crate::surface::Rgba;
use crate::trail::{TRAIL_COLOR, TRAIL_RADIUS, TrailStyle};

/// Gravitational acceleration used by the demo.
pub const GRAVITY: f64 = 9.81;

/// Rod length in surface units (pixels on a canvas).
pub const DEFAULT_ROD_LENGTH: f64 = 200.0;

/// Damping coefficient applied until the user changes it.
pub const DEFAULT_DAMPING: f64 = 0.05;

/// Fixed integration step, in simulated seconds per frame.
pub const DEFAULT_TIME_STEP: f64 = 0.25;

/// Number of bob positions kept in the trail.
pub const DEFAULT_MAX_TRAIL_LENGTH: usize = 75;

/// Opacity removed from every trail point per render pass.
pub const DEFAULT_DECAY_STEP: f64 = 0.05;

/// Angle and velocity magnitude below which the pendulum counts as at rest.
pub const EQUILIBRIUM_THRESHOLD: f64 = 0.01;

/// Range of the angle control, in degrees.
pub const ANGLE_RANGE_DEGREES: RangeInclusive<f64> = 0.0..=180.0;

/// Range of the damping control.
pub const DAMPING_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Errors detected when validating a [`SimulationConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A parameter that must be strictly positive is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The damping coefficient lies outside the control range.
    #[error("damping must be within 0..=1, got {0}")]
    DampingOutOfRange(f64),

    /// The trail must hold at least one point.
    #[error("max_trail_length must be at least 1")]
    ZeroTrailCapacity,

    /// The opacity decay step must lie in `(0, 1]`.
    #[error("decay_step must be within (0, 1], got {0}")]
    DecayStepOutOfRange(f64),
}

/// Everything needed to build a [`Simulation`](crate::Simulation).
///
/// The defaults reproduce the browser demo: a 200px rod under
/// 9.81 gravity, stepped 0.25s per frame, with a 75-point trail fading by
/// 0.05 per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Rod length, also the bob's distance from the pivot on the surface.
    pub rod_length: f64,
    /// Damping coefficient restored on reset.
    pub damping: f64,
    /// Integration step per frame.
    pub dt: f64,
    /// Trail capacity.
    pub max_trail_length: usize,
    /// Opacity decay per render.
    pub decay_step: f64,
    /// Radius of each trail disc.
    pub trail_radius: f64,
    /// Fill color of the trail.
    pub trail_color: Rgba,
    /// Rest detection thresholds.
    pub thresholds: EquilibriumThresholds,
    /// Width of the drawing surface. The pivot sits at its horizontal center.
    pub surface_width: f64,
    /// Height of the drawing surface.
    pub surface_height: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            rod_length: DEFAULT_ROD_LENGTH,
            damping: DEFAULT_DAMPING,
            dt: DEFAULT_TIME_STEP,
            max_trail_length: DEFAULT_MAX_TRAIL_LENGTH,
            decay_step: DEFAULT_DECAY_STEP,
            trail_radius: TRAIL_RADIUS,
            trail_color: TRAIL_COLOR,
            thresholds: EquilibriumThresholds::default(),
            // Swing envelope: rod plus disc radius on each side of the pivot
            surface_width: 2.0 * (DEFAULT_ROD_LENGTH + TRAIL_RADIUS) + 30.0,
            surface_height: DEFAULT_ROD_LENGTH + TRAIL_RADIUS + 25.0,
        }
    }
}

impl SimulationConfig {
    /// Creates a config with the demo defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial and reset damping coefficient.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the integration step.
    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the rod length.
    pub fn with_rod_length(mut self, rod_length: f64) -> Self {
        self.rod_length = rod_length;
        self
    }

    /// Sets the trail capacity.
    pub fn with_max_trail_length(mut self, max_trail_length: usize) -> Self {
        self.max_trail_length = max_trail_length;
        self
    }

    /// Sizes the drawing surface to the swing envelope of the current rod
    /// and trail radius, with a small margin.
    pub fn fit_surface_to_swing(self) -> Self {
        let reach = self.rod_length + self.trail_radius;
        self.with_surface_size(2.0 * reach + 30.0, reach + 25.0)
    }

    /// Sets the drawing surface size.
    pub fn with_surface_size(mut self, width: f64, height: f64) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking finiteness before
    /// sign and range constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("rod_length", self.rod_length),
            ("damping", self.damping),
            ("dt", self.dt),
            ("decay_step", self.decay_step),
            ("trail_radius", self.trail_radius),
            ("thresholds.angle", self.thresholds.angle),
            ("thresholds.velocity", self.thresholds.velocity),
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            ("gravity", self.gravity),
            ("rod_length", self.rod_length),
            ("dt", self.dt),
            ("trail_radius", self.trail_radius),
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !DAMPING_RANGE.contains(&self.damping) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        if self.max_trail_length == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        if self.decay_step <= 0.0 || self.decay_step > 1.0 {
            return Err(ConfigError::DecayStepOutOfRange(self.decay_step));
        }
        Ok(())
    }

    /// Integrator parameters derived from this config.
    pub fn params(&self) -> PendulumParams {
        PendulumParams {
            gravity: self.gravity,
            rod_length: self.rod_length,
            damping: self.damping,
            dt: self.dt,
        }
    }

    /// Trail drawing style derived from this config.
    pub fn trail_style(&self) -> TrailStyle {
        TrailStyle {
            radius: self.trail_radius,
            color: self.trail_color,
            decay_step: self.decay_step,
        }
    }

    /// Horizontal position of the pivot.
    pub fn pivot_x(&self) -> f64 {
        self.surface_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_surface_fits_swing_envelope() {
        let config = SimulationConfig::default();
        assert!(config.pivot_x() >= config.rod_length + config.trail_radius);
        assert!(config.surface_height >= config.rod_length + config.trail_radius);
    }

    #[test]
    fn test_fit_surface_follows_rod_length() {
        let config = SimulationConfig::default().with_rod_length(100.0).fit_surface_to_swing();
        assert!((config.surface_width - 260.0).abs() < f64::EPSILON);
        assert!((config.surface_height - 140.0).abs() < f64::EPSILON);
        assert_eq!(SimulationConfig::default().fit_surface_to_swing(), SimulationConfig::default());
    }

    #[test]
    fn test_rejects_non_finite_before_sign() {
        let config = SimulationConfig::default().with_rod_length(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "rod_length"
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let config = SimulationConfig::default().with_time_step(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "dt",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_damping_outside_control_range() {
        let config = SimulationConfig::default().with_damping(1.5);
        assert_eq!(config.validate(), Err(ConfigError::DampingOutOfRange(1.5)));
    }

    #[test]
    fn test_rejects_empty_trail() {
        let config = SimulationConfig::default().with_max_trail_length(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrailCapacity));
    }

    #[test]
    fn test_rejects_decay_step_outside_unit_interval() {
        let mut config = SimulationConfig::default();
        config.decay_step = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::DecayStepOutOfRange(0.0)));
        config.decay_step = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::DecayStepOutOfRange(1.5)));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ConfigError::NotPositive {
            field: "gravity",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "gravity must be greater than zero, got -1");
    }

    #[test]
    fn test_params_follow_config() {
        let config = SimulationConfig::default().with_damping(0.2).with_time_step(0.1);
        let params = config.params();
        assert!((params.damping - 0.2).abs() < f64::EPSILON);
        assert!((params.dt - 0.1).abs() < f64::EPSILON);
        assert!((params.gravity - GRAVITY).abs() < f64::EPSILON);
    }
}
