//! Frame scheduling through JavaScript callbacks.

use js_sys::Function;
use pendulum::{FrameHandle, FrameScheduler};
use wasm_bindgen::JsValue;

/// Converts a frame id from JavaScript into a [`FrameHandle`].
///
/// `requestAnimationFrame` ids are positive integers; zero, negatives and
/// non-finite values are not frame ids.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn handle_from_js(value: f64) -> Option<FrameHandle> {
    (value.is_finite() && value >= 1.0).then(|| FrameHandle(value.trunc() as u64))
}

/// A [`FrameScheduler`] that delegates to page-supplied callbacks.
///
/// `request` takes no arguments and returns the id of the scheduled frame;
/// `cancel` takes such an id. In a browser these wrap
/// `requestAnimationFrame` and `cancelAnimationFrame`. If `request` throws
/// or returns something other than a frame id, the error is logged to the
/// console and the simulation goes back to idle, so `start` can be retried.
#[derive(Debug, Clone)]
pub struct JsFrameScheduler {
    request: Function,
    cancel: Function,
}

impl JsFrameScheduler {
    /// Creates a scheduler from the two callbacks.
    #[must_use]
    pub const fn new(request: Function, cancel: Function) -> Self {
        Self { request, cancel }
    }
}

impl FrameScheduler for JsFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self.request.call0(&JsValue::NULL) {
            Ok(id) => {
                let handle = id.as_f64().and_then(handle_from_js);
                if handle.is_none() {
                    web_sys::console::error_2(
                        &"pendulum: requestFrame did not return a frame id".into(),
                        &id,
                    );
                }
                handle
            }
            Err(err) => {
                web_sys::console::error_2(&"pendulum: requestFrame threw".into(), &err);
                None
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn cancel_frame(&mut self, handle: FrameHandle) {
        let id = JsValue::from_f64(handle.0 as f64);
        if let Err(err) = self.cancel.call1(&JsValue::NULL, &id) {
            web_sys::console::error_2(&"pendulum: cancelFrame threw".into(), &err);
        }
    }
}
