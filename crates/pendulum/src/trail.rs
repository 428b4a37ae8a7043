//! The fading trail drawn behind the bob.
//!
//! The trail is a bounded FIFO of recent bob positions. New points enter at
//! full opacity; every [`TrailBuffer::render`] draws all points and then
//! fades each one by a fixed step. Fading is tied to render passes, not to
//! wall-clock time, so a host that renders twice as often fades twice as
//! fast.

use alloc::collections::VecDeque;

use crate::config::{DEFAULT_DECAY_STEP, DEFAULT_MAX_TRAIL_LENGTH};
use crate::geometry::Point;
use crate::surface::{Rgba, Surface};

/// Radius of each trail disc.
pub const TRAIL_RADIUS: f64 = 15.0;

/// Fill color of the trail.
pub const TRAIL_COLOR: Rgba = Rgba::rgb(99, 71, 255);

/// Opacity residue below this snaps to zero.
const OPACITY_EPSILON: f64 = 1e-9;

/// A visited bob position and its remaining opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// X coordinate on the surface.
    pub x: f64,
    /// Y coordinate on the surface.
    pub y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl TrailPoint {
    /// A fully opaque point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, opacity: 1.0 }
    }

    /// The point's position.
    #[inline]
    pub const fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Fades the point by `step`, never below zero.
    #[inline]
    pub fn fade(&mut self, step: f64) {
        let next = self.opacity - step;
        self.opacity = if next <= OPACITY_EPSILON { 0.0 } else { next };
    }
}

/// How trail points are painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailStyle {
    /// Disc radius.
    pub radius: f64,
    /// Disc color; its alpha is replaced by each point's opacity.
    pub color: Rgba,
    /// Opacity removed from each point per render.
    pub decay_step: f64,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            radius: TRAIL_RADIUS,
            color: TRAIL_COLOR,
            decay_step: DEFAULT_DECAY_STEP,
        }
    }
}

/// Bounded, chronologically ordered trail of bob positions.
///
/// # Example
///
/// ```rust
/// use pendulum::{RecordingSurface, TrailBuffer};
///
/// let mut trail = TrailBuffer::new(2);
/// trail.on_new_position(1.0, 1.0);
/// trail.on_new_position(2.0, 2.0);
/// trail.on_new_position(3.0, 3.0);
///
/// // Oldest point was evicted
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.oldest().map(|p| p.x), Some(2.0));
///
/// let mut surface = RecordingSurface::new();
/// trail.render(&mut surface);
/// assert!((trail.newest().unwrap().opacity - 0.95).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    style: TrailStyle,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRAIL_LENGTH)
    }
}

impl TrailBuffer {
    /// Creates an empty trail holding at most `capacity` points.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_style(capacity, TrailStyle::default())
    }

    /// Creates an empty trail with a custom drawing style.
    #[must_use]
    pub fn with_style(capacity: usize, style: TrailStyle) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            style,
        }
    }

    /// Maximum number of points kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The drawing style.
    pub fn style(&self) -> &TrailStyle {
        &self.style
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    /// The oldest point still in the trail.
    pub fn oldest(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    /// The most recently added point.
    pub fn newest(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    /// Appends a fully opaque point, evicting the oldest points beyond capacity.
    pub fn on_new_position(&mut self, x: f64, y: f64) {
        self.points.push_back(TrailPoint::new(x, y));
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Appends a point at `position`.
    pub fn push(&mut self, position: Point) {
        self.on_new_position(position.x, position.y);
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Clears `surface`, paints every point oldest first, then fades them.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        let TrailStyle {
            radius,
            color,
            decay_step,
        } = self.style;
        for point in &mut self.points {
            surface.fill_disc(point.position(), radius, color.with_alpha(point.opacity));
            point.fade(decay_step);
        }
    }
}

impl<'a> IntoIterator for &'a TrailBuffer {
    type Item = &'a TrailPoint;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, TrailPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use alloc::vec::Vec;

    #[test]
    fn test_new_points_are_opaque() {
        let mut trail = TrailBuffer::new(3);
        trail.on_new_position(4.0, 5.0);
        assert_eq!(trail.newest(), Some(&TrailPoint::new(4.0, 5.0)));
        assert!((trail.newest().unwrap().opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let mut trail = TrailBuffer::new(0);
        trail.on_new_position(1.0, 1.0);
        trail.on_new_position(2.0, 2.0);
        assert_eq!(trail.capacity(), 1);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.oldest().map(|p| p.x), Some(2.0));
    }

    #[test]
    fn test_eviction_is_oldest_first() {
        let mut trail = TrailBuffer::new(75);
        for i in 0..100 {
            trail.on_new_position(f64::from(i), 0.0);
        }
        assert_eq!(trail.len(), 75);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = (25..100).map(f64::from).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_render_clears_then_draws_in_order() {
        let mut trail = TrailBuffer::new(5);
        trail.on_new_position(1.0, 1.0);
        trail.on_new_position(2.0, 2.0);

        let mut surface = RecordingSurface::new();
        trail.render(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::Clear);
        assert_eq!(
            commands[1],
            DrawCommand::Disc {
                center: Point::new(1.0, 1.0),
                radius: TRAIL_RADIUS,
                color: TRAIL_COLOR,
            }
        );
        assert!(matches!(commands[2], DrawCommand::Disc { center, .. } if center == Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_render_draws_before_fading() {
        let mut trail = TrailBuffer::new(5);
        trail.on_new_position(0.0, 0.0);
        let mut surface = RecordingSurface::new();

        trail.render(&mut surface);
        trail.render(&mut surface);

        let alphas: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Disc { color, .. } => Some(color.a),
                DrawCommand::Clear => None,
            })
            .collect();
        assert!((alphas[0] - 1.0).abs() < 1e-12);
        assert!((alphas[1] - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_opacity_reaches_exactly_zero() {
        let mut trail = TrailBuffer::new(5);
        trail.on_new_position(0.0, 0.0);
        let mut surface = RecordingSurface::new();

        // 1.0 / 0.05 = 20 renders
        for _ in 0..19 {
            trail.render(&mut surface);
            assert!(trail.newest().unwrap().opacity > 0.0);
        }
        trail.render(&mut surface);
        assert_eq!(trail.newest().unwrap().opacity, 0.0);

        // Fully faded points stay in the trail at zero
        trail.render(&mut surface);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.newest().unwrap().opacity, 0.0);
    }

    #[test]
    fn test_custom_decay_step() {
        let style = TrailStyle {
            decay_step: 0.3,
            ..TrailStyle::default()
        };
        let mut trail = TrailBuffer::with_style(4, style);
        trail.on_new_position(0.0, 0.0);
        let mut surface = RecordingSurface::new();
        for _ in 0..3 {
            trail.render(&mut surface);
        }
        assert!((trail.newest().unwrap().opacity - 0.1).abs() < 1e-9);
        trail.render(&mut surface);
        assert_eq!(trail.newest().unwrap().opacity, 0.0);
    }

    #[test]
    fn test_clear_empties_trail() {
        let mut trail = TrailBuffer::new(5);
        trail.on_new_position(0.0, 0.0);
        trail.clear();
        assert!(trail.is_empty());

        let mut surface = RecordingSurface::new();
        trail.render(&mut surface);
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }
}
