#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use moves::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod moves;
mod tile;
mod types;

/// Smallest accepted board side.
pub const MIN_SIDE: Coord = 6;
/// Largest accepted board side.
pub const MAX_SIDE: Coord = 20;
/// Smallest accepted mine count.
pub const MIN_MINES: CellCount = 2;

/// Validated parameters for a fresh grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GridConfig {
    /// Builds a config without checking the bounds. Placement still guards
    /// against mine counts that would keep it from terminating.
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows < MIN_SIDE || rows > MAX_SIDE || cols < MIN_SIDE || cols > MAX_SIDE {
            return Err(GameError::InvalidDimensions);
        }
        if mines < MIN_MINES || mines >= mult(rows, cols) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_bounds() {
        assert!(GridConfig::new(6, 6, 2).is_ok());
        assert!(GridConfig::new(20, 20, 399).is_ok());
        assert!(GridConfig::new(10, 12, 19).is_ok());
    }

    #[test]
    fn config_rejects_bad_dimensions() {
        assert_eq!(GridConfig::new(5, 6, 2), Err(GameError::InvalidDimensions));
        assert_eq!(GridConfig::new(6, 21, 2), Err(GameError::InvalidDimensions));
        assert_eq!(GridConfig::new(0, 0, 2), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn config_rejects_bad_mine_counts() {
        assert_eq!(GridConfig::new(6, 6, 1), Err(GameError::InvalidMineCount));
        assert_eq!(GridConfig::new(6, 6, 36), Err(GameError::InvalidMineCount));
        assert_eq!(GridConfig::new(6, 6, 400), Err(GameError::InvalidMineCount));
    }
}
