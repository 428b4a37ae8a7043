#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::module_name_repetitions)]

//! # Pendulum
//!
//! A damped simple pendulum, stepped frame by frame, with a fading trail
//! drawn behind the bob.
//!
//! The crate provides:
//! - **Integrator**: explicit Euler stepping of angle and angular velocity
//!   under gravity and linear damping
//! - **Trail**: a bounded FIFO of recent bob positions whose opacity decays
//!   every time it is rendered
//! - **Run control**: the `Idle`/`Running` state machine and elapsed-time
//!   readout
//! - **Scheduling**: a [`FrameScheduler`] seam standing in for "call me again
//!   on the next display refresh", plus a synchronous [`FrameQueue`]
//! - **Simulation**: the controller tying all of the above together
//!
//! ## Integrator Example
//!
//! ```rust
//! use pendulum::{PendulumParams, PendulumState};
//!
//! let params = PendulumParams::default().with_damping(0.0);
//! let state = PendulumState::at_angle(core::f64::consts::FRAC_PI_6);
//!
//! let next = state.step(&params);
//! assert!(next.angle < state.angle);
//! assert!(next.angular_velocity < 0.0);
//! ```
//!
//! ## Simulation Example
//!
//! ```rust
//! use pendulum::{FrameQueue, RecordingSurface, Simulation, SimulationConfig, Timestamp};
//!
//! let mut sim = Simulation::new(SimulationConfig::default(), FrameQueue::new()).unwrap();
//! let mut surface = RecordingSurface::new();
//!
//! sim.set_angle_degrees(45.0);
//! sim.start(Timestamp::from_millis(0.0));
//!
//! // Drive the loop the way a display refresh would
//! let mut now = 0.0;
//! while let Some(frame) = sim.scheduler_mut().next_frame() {
//!     now += 16.0;
//!     sim.tick(frame, Timestamp::from_millis(now), &mut surface);
//!     if now > 1_000.0 {
//!         break;
//!     }
//! }
//!
//! assert!(sim.state().trail.len() > 1);
//! assert_eq!(sim.elapsed_text(), "1.0");
//! ```

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pendulum requires either the `std` or the `libm` feature for trigonometry");

mod config;
mod geometry;
mod integrator;
mod math;
mod run;
mod scheduler;
mod simulation;
mod surface;
mod trail;

pub use config::{
    ANGLE_RANGE_DEGREES, ConfigError, DAMPING_RANGE, DEFAULT_DAMPING, DEFAULT_DECAY_STEP,
    DEFAULT_MAX_TRAIL_LENGTH, DEFAULT_ROD_LENGTH, DEFAULT_TIME_STEP, EQUILIBRIUM_THRESHOLD,
    GRAVITY, SimulationConfig,
};
pub use geometry::{BobPosition, Point, bob_position};
pub use integrator::{EquilibriumThresholds, PendulumParams, PendulumState};
pub use math::{degrees_to_radians, radians_to_degrees};
pub use run::{RunControl, RunState, Timestamp, format_elapsed};
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use simulation::{Simulation, SimulationState, TickOutcome};
pub use surface::{DrawCommand, RecordingSurface, Rgba, Surface};
pub use trail::{TRAIL_COLOR, TRAIL_RADIUS, TrailBuffer, TrailPoint, TrailStyle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::SimulationConfig;
    pub use crate::integrator::{PendulumParams, PendulumState};
    pub use crate::run::Timestamp;
    pub use crate::scheduler::{FrameHandle, FrameQueue, FrameScheduler};
    pub use crate::simulation::{Simulation, TickOutcome};
    pub use crate::surface::{Rgba, Surface};
    pub use crate::trail::{TrailBuffer, TrailPoint};
}
