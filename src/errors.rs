use std::fmt;

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur during board operations.
///
/// Runtime operations never fail: deleting from an empty cell, undoing
/// with nothing recorded, or clicking outside the grid all degrade to
/// no-ops so a stray pointer event can never break the interaction loop.
/// The only rejected condition is bad geometry at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Non-positive grid dimensions or surface extent
    InvalidGeometry {
        rows: usize,
        cols: usize,
        width: f64,
        height: f64,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidGeometry {
                rows,
                cols,
                width,
                height,
            } => {
                write!(
                    f,
                    "Invalid geometry: {}x{} grid on a {}x{} surface (all dimensions must be positive)",
                    rows, cols, width, height
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}
