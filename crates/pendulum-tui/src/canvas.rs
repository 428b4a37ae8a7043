//! A character grid the trail can be painted onto.
//!
//! The simulation draws in its own coordinate space (the pivot at the top
//! center of a `width` x `height` surface). [`CharCanvas`] scales that space
//! onto `cols` x `rows` terminal cells and keeps one intensity per cell,
//! shown with block shading glyphs.

use pendulum::{BobPosition, Point, Rgba, SimulationConfig, Surface};

/// Glyphs from faintest to strongest.
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

/// Glyph for the rod.
pub const ROD_GLYPH: char = '*';

/// Glyph for the bob.
pub const BOB_GLYPH: char = 'O';

/// Glyph for the pivot.
pub const PIVOT_GLYPH: char = '+';

/// Maps an opacity to a shading glyph. Zero and below is blank.
#[must_use]
pub fn shade(intensity: f64) -> char {
    if intensity <= 0.0 {
        return ' ';
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((intensity * 4.0).ceil() as usize).clamp(1, SHADES.len()) - 1;
    SHADES[index]
}

/// Terminal cells holding the trail.
#[derive(Debug, Clone, PartialEq)]
pub struct CharCanvas {
    cols: usize,
    rows: usize,
    width: f64,
    height: f64,
    cells: Vec<f64>,
}

impl CharCanvas {
    /// Creates a blank grid of `cols` x `rows` cells covering a
    /// `width` x `height` drawing space.
    #[must_use]
    pub fn new(cols: usize, rows: usize, width: f64, height: f64) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            width,
            height,
            cells: vec![0.0; cols * rows],
        }
    }

    /// Creates a grid covering the surface of `config`.
    #[must_use]
    pub fn for_config(cols: usize, rows: usize, config: &SimulationConfig) -> Self {
        Self::new(cols, rows, config.surface_width, config.surface_height)
    }

    /// Changes the grid size, blanking it.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        *self = Self::new(cols, rows, self.width, self.height);
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Intensity of a cell, 0 if outside the grid.
    #[must_use]
    pub fn intensity(&self, col: usize, row: usize) -> f64 {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            0.0
        }
    }

    /// Number of cells with any intensity.
    #[must_use]
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c > 0.0).count()
    }

    /// The cell containing `point`, if it lies on the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_of(&self, point: Point) -> Option<(usize, usize)> {
        let col = (point.x / self.col_width()).floor();
        let row = (point.y / self.row_height()).floor();
        if col < 0.0 || row < 0.0 || !col.is_finite() || !row.is_finite() {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    #[allow(clippy::cast_precision_loss)]
    fn col_width(&self) -> f64 {
        self.width / self.cols as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn row_height(&self) -> f64 {
        self.height / self.rows as f64
    }

    fn brighten(&mut self, col: usize, row: usize, intensity: f64) {
        let cell = &mut self.cells[row * self.cols + col];
        *cell = cell.max(intensity);
    }

    /// Renders the grid as text, one string per row.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| shade(*c)).collect())
            .collect()
    }

    /// Renders the grid with the pivot, rod and bob drawn over the trail.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compose(&self, pivot: Point, bob: &BobPosition) -> Vec<String> {
        let mut grid: Vec<Vec<char>> = self
            .cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| shade(*c)).collect())
            .collect();
        let mut put = |point: Point, glyph: char| {
            if let Some((col, row)) = self.cell_of(point) {
                grid[row][col] = glyph;
            }
        };

        let samples = 2 * self.cols.max(self.rows);
        for i in 1..samples {
            let t = i as f64 / samples as f64;
            let point = Point::new(
                pivot.x + (bob.center.x - pivot.x) * t,
                pivot.y + (bob.center.y - pivot.y) * t,
            );
            put(point, ROD_GLYPH);
        }
        put(pivot, PIVOT_GLYPH);
        put(bob.center, BOB_GLYPH);

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

impl Surface for CharCanvas {
    fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        // Discs centered off the grid can still reach onto it
        if let Some((center_col, center_row)) = self.cell_of(center) {
            self.brighten(center_col, center_row, color.a);
        }

        let (cw, rh) = (self.col_width(), self.row_height());
        let first_col = ((center.x - radius) / cw).floor().max(0.0) as usize;
        let last_col = (((center.x + radius) / cw).ceil() as usize).min(self.cols);
        let first_row = ((center.y - radius) / rh).floor().max(0.0) as usize;
        let last_row = (((center.y + radius) / rh).ceil() as usize).min(self.rows);

        for row in first_row..last_row {
            for col in first_col..last_col {
                let dx = (col as f64 + 0.5).mul_add(cw, -center.x);
                let dy = (row as f64 + 0.5).mul_add(rh, -center.y);
                if dx.hypot(dy) <= radius {
                    self.brighten(col, row, color.a);
                }
            }
        }
    }
}
