// Cell geometry - maps between the logical (row, col) grid and surface
// pixel coordinates. Derived deterministically from the config; the
// board occupies 80% of the surface extent along each axis and is
// centered, where the offsets are the pixel position of row/col 0.

use crate::config::BoardConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub cell_width: f64,
    pub cell_height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Piece radius; chosen so markers in adjacent cells never touch
    pub marker_radius: f64,
}

impl CellGeometry {
    /// Compute geometry from a validated config.
    pub fn from_config(config: &BoardConfig) -> Self {
        let cell_width = config.width * 0.8 / config.cols as f64;
        let cell_height = config.height * 0.8 / config.rows as f64;
        let x_offset = (config.width - cell_width * (config.cols - 1) as f64) / 2.0;
        let y_offset = (config.height - cell_height * (config.rows - 1) as f64) / 2.0;
        let marker_radius = (cell_width / 2.1).min(cell_height / 2.1);

        Self {
            cell_width,
            cell_height,
            x_offset,
            y_offset,
            marker_radius,
        }
    }

    /// Pixel position of the center of cell (row, col).
    pub fn cell_to_pixel(&self, row: i32, col: i32) -> (f64, f64) {
        (
            self.x_offset + self.cell_width * col as f64,
            self.y_offset + self.cell_height * row as f64,
        )
    }

    /// Nearest cell to the pixel position (x, y).
    ///
    /// This is nearest-cell rounding, not containment testing: positions
    /// near or beyond the board edge resolve to out-of-range indices
    /// (including negative ones). Callers must tolerate out-of-grid cells.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        let col = ((x - self.x_offset + self.cell_width / 2.0) / self.cell_width).floor();
        let row = ((y - self.y_offset + self.cell_height / 2.0) / self.cell_height).floor();
        (row as i32, col as i32)
    }
}
