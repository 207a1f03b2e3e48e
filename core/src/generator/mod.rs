use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Produces the tile matrix for a fresh grid: mines placed, neighbor
/// counts final, every tile still hidden.
pub trait MineGenerator {
    fn generate(self, config: GridConfig) -> Array2<Tile>;
}
