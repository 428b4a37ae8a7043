//! Browser-based WASM tests.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use pendulum_wasm::PendulumDemo;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

wasm_bindgen_test_configure!(run_in_browser);

// === Helper Functions ===

fn create_context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let doc = window().expect("no window").document().expect("no document");
    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")
        .expect("create canvas failed")
        .dyn_into()
        .expect("not a canvas");
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .expect("get_context failed")
        .expect("no 2d context")
        .dyn_into()
        .expect("not a 2d context")
}

/// Counter-backed callbacks: `request` returns 1, 2, 3, ... and both record
/// their calls on `globalThis`.
fn scheduler_callbacks() -> (Function, Function) {
    let request = Function::new_no_args(
        "globalThis.__requested = (globalThis.__requested || 0) + 1; return globalThis.__requested;",
    );
    let cancel = Function::new_with_args(
        "id",
        "globalThis.__cancelled = (globalThis.__cancelled || []); globalThis.__cancelled.push(id);",
    );
    (request, cancel)
}

fn global_number(name: &str) -> f64 {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn new_demo() -> PendulumDemo {
    let (request, cancel) = scheduler_callbacks();
    PendulumDemo::new(create_context(460, 240), 460.0, 240.0, request, cancel)
        .expect("demo creation failed")
}

// === Tests ===

#[wasm_bindgen_test]
fn test_module_ready() {
    assert!(pendulum_wasm::is_ready());
}

#[wasm_bindgen_test]
fn test_initial_readouts() {
    let demo = new_demo();
    assert!(!demo.is_running());
    assert_eq!(demo.elapsed_text(), "0.0");
    assert_eq!(demo.angle_label(), "0");
    assert_eq!(demo.damping_label(), "0.05");
    assert_eq!(demo.trail_length(), 0);
}

#[wasm_bindgen_test]
fn test_invalid_canvas_size_is_rejected() {
    let (request, cancel) = scheduler_callbacks();
    let result = PendulumDemo::new(create_context(10, 10), 0.0, 240.0, request, cancel);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_start_and_frame() {
    let mut demo = new_demo();
    demo.set_angle_degrees(30.0);
    let before = global_number("__requested");

    assert!(demo.start(0.0));
    assert!(demo.is_running());
    let first = global_number("__requested");
    assert_eq!(first, before + 1.0);

    assert!(demo.frame(first, 1_230.0));
    assert_eq!(demo.elapsed_text(), "1.2");
    assert!(demo.rotation_degrees() < 30.0);
    assert_eq!(demo.trail_length(), 2);
    // The next frame was requested
    assert_eq!(global_number("__requested"), first + 1.0);
}

#[wasm_bindgen_test]
fn test_failed_frame_request_leaves_demo_idle() {
    let request = Function::new_no_args("throw new Error('no display');");
    let cancel = Function::new_with_args("id", "");
    let mut demo = PendulumDemo::new(create_context(460, 240), 460.0, 240.0, request, cancel)
        .expect("demo creation failed");
    demo.set_angle_degrees(30.0);

    assert!(!demo.start(0.0));
    assert!(!demo.is_running());
    assert!(!demo.frame(0.0, 16.0));
    assert_eq!(demo.ticks(), 0.0);
}

#[wasm_bindgen_test]
fn test_non_numeric_frame_id_leaves_demo_idle() {
    let request = Function::new_no_args("return 'soon';");
    let cancel = Function::new_with_args("id", "");
    let mut demo = PendulumDemo::new(create_context(460, 240), 460.0, 240.0, request, cancel)
        .expect("demo creation failed");

    assert!(!demo.start(0.0));
    assert!(!demo.is_running());
}

#[wasm_bindgen_test]
fn test_stale_frame_is_ignored() {
    let mut demo = new_demo();
    demo.set_angle_degrees(45.0);
    demo.start(0.0);
    let first = global_number("__requested");
    assert!(demo.frame(first, 16.0));
    assert!(!demo.frame(first, 32.0));
    assert_eq!(demo.ticks(), 1.0);
}

#[wasm_bindgen_test]
fn test_reset_cancels_and_restores() {
    let mut demo = new_demo();
    demo.set_angle_degrees(60.0);
    demo.set_damping(0.5);
    demo.start(0.0);
    let pending = global_number("__requested");

    demo.reset();

    assert!(!demo.is_running());
    assert_eq!(demo.elapsed_text(), "0.0");
    assert_eq!(demo.angle_label(), "0");
    assert_eq!(demo.damping_label(), "0.05");
    assert_eq!(demo.trail_length(), 0);
    assert!(!demo.frame(pending, 100.0));

    let cancelled = Reflect::get(&js_sys::global(), &JsValue::from_str("__cancelled"))
        .expect("cancel was never called");
    let cancelled: js_sys::Array = cancelled.dyn_into().expect("not an array");
    assert!(cancelled.includes(&JsValue::from_f64(pending), 0));
}

#[wasm_bindgen_test]
fn test_bob_hangs_below_pivot_at_rest() {
    let demo = new_demo();
    assert!((demo.bob_x() - 230.0).abs() < 1e-9);
    assert!((demo.bob_y() - 200.0).abs() < 1e-9);
    assert!(demo.rotation_degrees().abs() < 1e-9);
}
