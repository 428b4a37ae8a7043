//! HTML canvas as a trail [`Surface`].

use std::f64::consts::TAU;

use pendulum::{Point, Rgba, Surface};
use web_sys::CanvasRenderingContext2d;

/// Formats a color as a CSS `rgba()` string.
///
/// # Example
///
/// ```rust
/// use pendulum::Rgba;
/// use pendulum_wasm::css_rgba;
///
/// assert_eq!(css_rgba(Rgba::rgb(99, 71, 255).with_alpha(0.5)), "rgba(99, 71, 255, 0.5)");
/// ```
#[must_use]
pub fn css_rgba(color: Rgba) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

/// A 2D canvas context the trail paints onto.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wraps a context whose canvas is `width` by `height` pixels.
    #[must_use]
    pub const fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// The wrapped context.
    #[must_use]
    pub const fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            // Only fails for a negative radius, which config validation rejects
            web_sys::console::warn_2(&"pendulum: canvas arc failed".into(), &err);
            return;
        }
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendulum::TRAIL_COLOR;

    #[test]
    fn test_css_rgba_opaque() {
        assert_eq!(css_rgba(TRAIL_COLOR), "rgba(99, 71, 255, 1)");
    }

    #[test]
    fn test_css_rgba_faded() {
        assert_eq!(css_rgba(TRAIL_COLOR.with_alpha(0.0)), "rgba(99, 71, 255, 0)");
        assert_eq!(css_rgba(TRAIL_COLOR.with_alpha(0.25)), "rgba(99, 71, 255, 0.25)");
    }
}
