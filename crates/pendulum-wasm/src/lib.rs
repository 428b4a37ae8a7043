//! # pendulum-wasm
//!
//! The damped pendulum demo for the web, compiled to WebAssembly.
//!
//! The page keeps ownership of everything browser-specific: it looks up the
//! canvas and controls, wires their events, applies the bob's rotation and
//! schedules animation frames. This crate owns the physics, the trail and
//! the readouts, and paints the trail onto the canvas it is given.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { PendulumDemo } from 'pendulum-wasm';
//!
//! async function main() {
//!     await init();
//!
//!     const canvas = document.getElementById('trailCanvas');
//!     const bob = document.getElementById('pendulum');
//!     const elapsed = document.getElementById('timeElapsed');
//!
//!     let demo;
//!     const requestFrame = () => {
//!         const id = requestAnimationFrame((ts) => {
//!             if (demo.frame(id, ts)) {
//!                 bob.style.transform = `rotate(${demo.rotationDegrees}deg)`;
//!                 elapsed.textContent = demo.elapsedText;
//!             }
//!         });
//!         return id;
//!     };
//!     const cancelFrame = (id) => cancelAnimationFrame(id);
//!
//!     demo = new PendulumDemo(
//!         canvas.getContext('2d'), canvas.width, canvas.height,
//!         requestFrame, cancelFrame,
//!     );
//!
//!     document.getElementById('startButton')
//!         .addEventListener('click', () => demo.start(performance.now()));
//!     document.getElementById('resetButton')
//!         .addEventListener('click', () => demo.reset());
//! }
//!
//! main();
//! ```
//!
//! ## Available APIs
//!
//! - `PendulumDemo` - the simulation bound to a canvas
//! - `version()` - crate version
//! - `isReady()` - module loaded check

#![forbid(unsafe_code)]

// Use wee_alloc for smaller binaries (optional)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod canvas;
mod demo;
mod scheduler;

use wasm_bindgen::prelude::*;

pub use canvas::{CanvasSurface, css_rgba};
pub use demo::PendulumDemo;
pub use scheduler::{JsFrameScheduler, handle_from_js};

/// Initialize the module.
///
/// Installs the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the module is properly initialized.
#[must_use]
#[wasm_bindgen(js_name = "isReady")]
#[allow(clippy::missing_const_for_fn)] // wasm_bindgen doesn't support const fn
pub fn is_ready() -> bool {
    true
}
