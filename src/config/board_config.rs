// Board configuration - grid dimensions plus the surface extent the
// board is drawn on.

use crate::errors::{BoardError, BoardResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 8, // Default board size
            cols: 8,
            width: 800.0,
            height: 500.0,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, width: f64, height: f64) -> Self {
        Self {
            rows,
            cols,
            width,
            height,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Reject non-positive dimensions. Geometry is derived from these four
    /// values, so a zero row count or a negative width would poison every
    /// later computation; everything else in the crate assumes a validated
    /// config.
    pub fn validate(&self) -> BoardResult<()> {
        let extent_ok =
            self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0;
        if self.rows == 0 || self.cols == 0 || !extent_ok {
            return Err(BoardError::InvalidGeometry {
                rows: self.rows,
                cols: self.cols,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 8);
        assert_eq!(config.cell_count(), 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_rows() {
        let config = BoardConfig::new(0, 8, 800.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(BoardError::InvalidGeometry { rows: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_extent() {
        assert!(BoardConfig::new(8, 8, 0.0, 500.0).validate().is_err());
        assert!(BoardConfig::new(8, 8, 800.0, -1.0).validate().is_err());
        assert!(BoardConfig::new(8, 8, f64::NAN, 500.0).validate().is_err());
    }
}
