// BoardGrid - grid drawing, piece registry, and click hit-testing.
// Delegates all actual drawing to the abstract surface; owns everything
// about which cell holds what.

use log::debug;
use std::collections::HashMap;

use crate::board::geometry::CellGeometry;
use crate::config::BoardConfig;
use crate::errors::BoardResult;
use crate::surface::{DrawingSurface, PointerEvent, PrimitiveId};

/// Color of a grid line
const LINE_COLOR: &str = "black";
const LINE_WIDTH: f64 = 1.0;

/// A marker occupying one cell of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: PrimitiveId,
    pub color: String,
}

/// Handler invoked on a resolved click: (row, col, occupant color).
/// The color is empty when the clicked cell holds no piece.
pub type ClickHandler = Box<dyn FnMut(i32, i32, &str)>;

pub struct BoardGrid {
    config: BoardConfig,
    geometry: CellGeometry,
    /// Handles of the drawn grid lines, kept so resize can erase them
    grid_lines: Vec<PrimitiveId>,
    /// At most one piece per cell. Keys are i32 because click resolution
    /// can produce out-of-range (even negative) cells and placing there
    /// is allowed; the board does not police its own edges.
    occupancy: HashMap<(i32, i32), Piece>,
    click_handler: Option<ClickHandler>,
    always_call: bool,
}

impl BoardGrid {
    /// Validate the config, compute geometry, and draw the grid lines.
    pub fn new(config: BoardConfig, surface: &mut dyn DrawingSurface) -> BoardResult<Self> {
        config.validate()?;
        let geometry = CellGeometry::from_config(&config);
        let mut board = Self {
            config,
            geometry,
            grid_lines: Vec::new(),
            occupancy: HashMap::new(),
            click_handler: None,
            always_call: false,
        };
        board.draw_board(surface);
        Ok(board)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    /// Draw the grid: `cols` vertical and `rows` horizontal lines spanning
    /// the full board extent. Runs once during construction; calling it
    /// again draws a duplicate set of lines on top of the first.
    pub fn draw_board(&mut self, surface: &mut dyn DrawingSurface) {
        let g = &self.geometry;
        let span_x = g.cell_width * (self.config.cols - 1) as f64;
        let span_y = g.cell_height * (self.config.rows - 1) as f64;

        for i in 0..self.config.cols {
            let x = g.x_offset + g.cell_width * i as f64;
            let id = surface.create_line(x, g.y_offset, x, g.y_offset + span_y, LINE_COLOR, LINE_WIDTH);
            self.grid_lines.push(id);
        }
        for j in 0..self.config.rows {
            let y = g.y_offset + g.cell_height * j as f64;
            let id = surface.create_line(g.x_offset, y, g.x_offset + span_x, y, LINE_COLOR, LINE_WIDTH);
            self.grid_lines.push(id);
        }
    }

    /// Put a piece of the given color at (row, col).
    ///
    /// An occupied cell is left untouched when `overwrite` is false.
    /// Otherwise the previous marker is deleted before the replacement is
    /// drawn, whatever its color, so the old primitive never outlives its
    /// registry entry.
    pub fn place_piece(
        &mut self,
        surface: &mut dyn DrawingSurface,
        row: i32,
        col: i32,
        color: &str,
        overwrite: bool,
    ) {
        if let Some(existing) = self.occupancy.get(&(row, col)) {
            if !overwrite {
                debug!(
                    "place_piece: cell ({}, {}) already holds {}, overwrite disabled",
                    row, col, existing.color
                );
                return;
            }
            surface.delete_primitive(existing.id);
        }

        let (x, y) = self.geometry.cell_to_pixel(row, col);
        let r = self.geometry.marker_radius;
        let id = surface.create_oval(x - r, y - r, x + r, y + r, color);
        self.occupancy.insert(
            (row, col),
            Piece {
                id,
                color: color.to_string(),
            },
        );
    }

    /// Remove the piece at (row, col), if there is any.
    pub fn remove_piece(&mut self, surface: &mut dyn DrawingSurface, row: i32, col: i32) {
        match self.occupancy.remove(&(row, col)) {
            Some(piece) => surface.delete_primitive(piece.id),
            None => debug!("remove_piece: cell ({}, {}) is empty", row, col),
        }
    }

    /// Move the piece at (from_row, from_col) to (to_row, to_col),
    /// replacing whatever occupies the destination. No-op if the source
    /// cell is empty.
    pub fn move_piece(
        &mut self,
        surface: &mut dyn DrawingSurface,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) {
        let piece = match self.occupancy.remove(&(from_row, from_col)) {
            Some(piece) => piece,
            None => {
                debug!("move_piece: source cell ({}, {}) is empty", from_row, from_col);
                return;
            }
        };
        surface.delete_primitive(piece.id);
        self.place_piece(surface, to_row, to_col, &piece.color, true);
    }

    /// Register the click handler. When a pointer press resolves to an
    /// occupied cell the handler receives (row, col, color); on an empty
    /// cell it is only called when `always_call` is set, with an empty
    /// color string. Re-binding replaces the previous handler.
    pub fn bind_click<F>(&mut self, handler: F, always_call: bool)
    where
        F: FnMut(i32, i32, &str) + 'static,
    {
        self.click_handler = Some(Box::new(handler));
        self.always_call = always_call;
    }

    /// Resolve a pointer press at pixel (x, y) to the nearest cell and
    /// dispatch to the bound click handler.
    ///
    /// The resolved cell is not clamped to the grid: presses near the
    /// board edge deliver out-of-range indices and the handler must
    /// tolerate them.
    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        let (row, col) = self.geometry.pixel_to_cell(x, y);
        let occupant = self.occupancy.get(&(row, col)).map(|p| p.color.clone());
        let always_call = self.always_call;

        let handler = match self.click_handler.as_mut() {
            Some(handler) => handler,
            None => return,
        };
        match occupant {
            Some(color) => handler(row, col, &color),
            None if always_call => handler(row, col, ""),
            None => {}
        }
    }

    /// Forward a host pointer event. Only presses matter to the board;
    /// drags and releases belong to the paintbrush.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Press { x, y } = event {
            self.pointer_pressed(x, y);
        }
    }

    /// Draw an untracked circular marker of radius `marker_radius * r` at
    /// (row, col). The marker is not part of the occupancy registry -
    /// move/remove never touch it - and the returned handle is the
    /// caller's to delete.
    pub fn add_marker(
        &self,
        surface: &mut dyn DrawingSurface,
        row: i32,
        col: i32,
        color: &str,
        r: f64,
    ) -> PrimitiveId {
        let (x, y) = self.geometry.cell_to_pixel(row, col);
        let size = self.geometry.marker_radius * r;
        surface.create_oval(x - size, y - size, x + size, y + size, color)
    }

    /// Pixel position of the center of cell (row, col).
    pub fn cell_to_pixel(&self, row: i32, col: i32) -> (f64, f64) {
        self.geometry.cell_to_pixel(row, col)
    }

    /// Color of the piece at (row, col), if any.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<&str> {
        self.occupancy.get(&(row, col)).map(|p| p.color.as_str())
    }

    pub fn is_cell_occupied(&self, row: i32, col: i32) -> bool {
        self.occupancy.contains_key(&(row, col))
    }

    /// Number of occupied cells
    pub fn occupied_cells(&self) -> usize {
        self.occupancy.len()
    }

    /// Iterate over all pieces currently on the board.
    pub fn pieces(&self) -> impl Iterator<Item = (&(i32, i32), &Piece)> {
        self.occupancy.iter()
    }

    /// Adopt a new surface extent: recompute geometry, then erase and
    /// redraw the grid lines and every piece at its new position.
    pub fn resize(
        &mut self,
        surface: &mut dyn DrawingSurface,
        width: f64,
        height: f64,
    ) -> BoardResult<()> {
        let config = BoardConfig {
            width,
            height,
            ..self.config.clone()
        };
        config.validate()?;

        for id in self.grid_lines.drain(..) {
            surface.delete_primitive(id);
        }
        self.config = config;
        self.geometry = CellGeometry::from_config(&self.config);
        self.draw_board(surface);

        let pieces: Vec<((i32, i32), String)> = self
            .occupancy
            .iter()
            .map(|(cell, piece)| (*cell, piece.color.clone()))
            .collect();
        for ((row, col), color) in pieces {
            if let Some(old) = self.occupancy.remove(&(row, col)) {
                surface.delete_primitive(old.id);
            }
            self.place_piece(surface, row, col, &color, true);
        }
        debug!(
            "resize: board now {}x{} pixels, {} pieces redrawn",
            width,
            height,
            self.occupancy.len()
        );
        Ok(())
    }
}
