//! Surface coordinates of the bob.

use crate::math::{cos, radians_to_degrees, sin};

/// A point on the drawing surface.
///
/// The origin is the top-left corner and `y` grows downward, so a hanging
/// bob has a positive `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position of the bob for a given rod angle.
///
/// The pivot is at `(pivot_x, 0)`; an angle of zero hangs straight down.
///
/// # Example
///
/// ```rust
/// use pendulum::bob_position;
///
/// let p = bob_position(0.0, 200.0, 230.0);
/// assert_eq!((p.x, p.y), (230.0, 200.0));
/// ```
#[inline]
pub fn bob_position(angle: f64, rod_length: f64, pivot_x: f64) -> Point {
    Point {
        x: pivot_x + rod_length * sin(angle),
        y: rod_length * cos(angle),
    }
}

/// The bob as a host displays it: where it is and how far the rod is turned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BobPosition {
    /// Center of the bob on the surface.
    pub center: Point,
    /// Rotation of the rod from vertical, in degrees.
    pub rotation_degrees: f64,
}

impl BobPosition {
    /// Derives the bob from the rod angle.
    pub fn from_angle(angle: f64, rod_length: f64, pivot_x: f64) -> Self {
        Self {
            center: bob_position(angle, rod_length, pivot_x),
            rotation_degrees: radians_to_degrees(angle),
        }
    }
}
