// Board module - grid geometry, the piece registry, and click dispatch

pub mod geometry;
pub mod grid;

// Re-export the main types for easy access
pub use geometry::CellGeometry;
pub use grid::{BoardGrid, ClickHandler, Piece};
