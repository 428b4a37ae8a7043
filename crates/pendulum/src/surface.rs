//! Drawing surfaces the trail renders onto.
//!
//! A [`Surface`] only needs two operations: wipe everything, and fill a disc.
//! Hosts adapt their own canvas (an HTML canvas, a terminal grid) to it;
//! [`RecordingSurface`] captures the calls for tests and headless runs.

use alloc::vec::Vec;

use crate::geometry::Point;

/// An RGB color with a floating point alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the same color with a different alpha, clamped to `[0, 1]`.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// A 2D region that can be cleared and painted with filled discs.
pub trait Surface {
    /// Clears the entire surface.
    fn clear(&mut self);

    /// Fills a disc of `radius` centered at `center`.
    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        (**self).fill_disc(center, radius, color);
    }
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// The surface was cleared.
    Clear,
    /// A disc was filled.
    Disc {
        /// Disc center.
        center: Point,
        /// Disc radius.
        radius: f64,
        /// Fill color.
        color: Rgba,
    },
}

/// A surface that records every draw call instead of painting.
///
/// # Example
///
/// ```rust
/// use pendulum::{DrawCommand, Point, RecordingSurface, Rgba, Surface};
///
/// let mut surface = RecordingSurface::new();
/// surface.clear();
/// surface.fill_disc(Point::new(1.0, 2.0), 3.0, Rgba::rgb(0, 0, 0));
///
/// assert_eq!(surface.commands().len(), 2);
/// assert_eq!(surface.clear_count(), 1);
/// assert_eq!(surface.discs_since_clear().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface was cleared.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Clear))
            .count()
    }

    /// Discs drawn after the most recent clear, i.e. what is visible now.
    pub fn discs_since_clear(&self) -> impl Iterator<Item = (Point, f64, Rgba)> + '_ {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::Clear))
            .map_or(0, |idx| idx + 1);
        self.commands[start..].iter().filter_map(|cmd| match *cmd {
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            DrawCommand::Clear => None,
        })
    }

    /// Forgets all recorded calls.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }
}
