//! e_board - an interactive board/canvas substrate.
//!
//! Two independent components share one abstract drawing surface:
//! [`BoardGrid`] renders a chessboard-like grid, tracks which cell holds
//! which piece, and dispatches click events with resolved (row, col,
//! color) info; [`Paintbrush`] records freehand pointer-drag gestures and
//! supports stroke-level undo. Neither component knows about the other,
//! and neither knows what the surface actually is - a terminal canvas, a
//! GUI widget, or a mock in tests.

pub mod board;
pub mod config;
pub mod display;
pub mod errors;
pub mod stroke;
pub mod surface;

// Re-export the main types for easy access
pub use board::{BoardGrid, CellGeometry, Piece};
pub use config::BoardConfig;
pub use errors::{BoardError, BoardResult};
pub use stroke::Paintbrush;
pub use surface::{DrawingSurface, PointerEvent, PrimitiveId};
