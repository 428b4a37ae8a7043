//! The simulation exposed to JavaScript.

use js_sys::Function;
use pendulum::{Simulation, SimulationConfig, Timestamp};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::canvas::CanvasSurface;
use crate::scheduler::{JsFrameScheduler, handle_from_js};

/// A pendulum simulation painting its trail onto a canvas.
///
/// The page calls [`start`](Self::start) and [`reset`](Self::reset) from its
/// buttons, [`setAngleDegrees`](Self::set_angle_degrees) and
/// [`setDamping`](Self::set_damping) from its sliders, and
/// [`frame`](Self::frame) from every animation frame it was asked to
/// schedule. After each call it reads the getters to update the bob
/// rotation and the readouts.
#[wasm_bindgen]
#[derive(Debug)]
pub struct PendulumDemo {
    sim: Simulation<JsFrameScheduler>,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl PendulumDemo {
    /// Binds a new idle simulation to a canvas context.
    ///
    /// `request_frame` must schedule a frame and return its id;
    /// `cancel_frame` receives such an id.
    ///
    /// # Errors
    ///
    /// Fails if the canvas dimensions are not positive and finite.
    #[wasm_bindgen(constructor)]
    pub fn new(
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
        request_frame: Function,
        cancel_frame: Function,
    ) -> Result<Self, JsError> {
        let config = SimulationConfig::default().with_surface_size(width, height);
        let scheduler = JsFrameScheduler::new(request_frame, cancel_frame);
        let sim = Simulation::new(config, scheduler)?;
        Ok(Self {
            sim,
            surface: CanvasSurface::new(ctx, width, height),
        })
    }

    /// Starts the animation. `now_ms` is a `performance.now()` reading.
    ///
    /// Returns `false` if it was already running, or if `request_frame`
    /// failed to schedule the first frame.
    pub fn start(&mut self, now_ms: f64) -> bool {
        self.sim.start(Timestamp::from_millis(now_ms))
    }

    /// Stops the animation and returns everything to its initial state.
    pub fn reset(&mut self) {
        self.sim.reset(&mut self.surface);
    }

    /// Runs one animation frame.
    ///
    /// Returns `true` if the pendulum advanced; frames that were cancelled
    /// or arrive while idle return `false`.
    pub fn frame(&mut self, handle: f64, now_ms: f64) -> bool {
        let Some(handle) = handle_from_js(handle) else {
            return false;
        };
        let outcome = self.sim.tick(handle, Timestamp::from_millis(now_ms), &mut self.surface);
        matches!(outcome, pendulum::TickOutcome::Advanced { .. })
    }

    /// Angle slider input, in degrees.
    #[wasm_bindgen(js_name = "setAngleDegrees")]
    pub fn set_angle_degrees(&mut self, degrees: f64) {
        self.sim.set_angle_degrees(degrees);
    }

    /// Damping slider input.
    #[wasm_bindgen(js_name = "setDamping")]
    pub fn set_damping(&mut self, damping: f64) {
        self.sim.set_damping(damping);
    }

    /// Elapsed-time readout in seconds, one decimal place.
    #[wasm_bindgen(getter, js_name = "elapsedText")]
    pub fn elapsed_text(&self) -> String {
        self.sim.elapsed_text().to_string()
    }

    /// Angle slider label, in degrees.
    #[wasm_bindgen(getter, js_name = "angleLabel")]
    pub fn angle_label(&self) -> String {
        self.sim.angle_label()
    }

    /// Damping slider label.
    #[wasm_bindgen(getter, js_name = "dampingLabel")]
    pub fn damping_label(&self) -> String {
        self.sim.damping_label()
    }

    /// Rotation to apply to the bob element, in degrees.
    #[wasm_bindgen(getter, js_name = "rotationDegrees")]
    pub fn rotation_degrees(&self) -> f64 {
        self.sim.bob().rotation_degrees
    }

    /// Bob center, horizontal canvas coordinate.
    #[wasm_bindgen(getter, js_name = "bobX")]
    pub fn bob_x(&self) -> f64 {
        self.sim.bob().center.x
    }

    /// Bob center, vertical canvas coordinate.
    #[wasm_bindgen(getter, js_name = "bobY")]
    pub fn bob_y(&self) -> f64 {
        self.sim.bob().center.y
    }

    /// Whether the animation loop is running.
    #[wasm_bindgen(getter, js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Points currently held in the trail.
    #[wasm_bindgen(getter, js_name = "trailLength")]
    pub fn trail_length(&self) -> usize {
        self.sim.state().trail.len()
    }

    /// Frames advanced since the last reset.
    #[wasm_bindgen(getter)]
    #[allow(clippy::cast_precision_loss)]
    pub fn ticks(&self) -> f64 {
        self.sim.state().ticks as f64
    }
}
