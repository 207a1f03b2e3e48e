use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform rejection sampling: draw a position, place a mine if the cell
/// has none, repeat until enough are down. Each placement bumps the
/// neighbor count of every adjacent cell, so counts are final as soon as
/// the last mine lands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GridConfig) -> Array2<Tile> {
        let mut tiles: Array2<Tile> =
            Array2::from_elem([config.rows as usize, config.cols as usize], Tile::EMPTY);

        let total = config.total_tiles();
        let mut remaining = config.mines;
        if remaining >= total {
            // rejection sampling never finishes on a full board
            log::warn!(
                "Requested {} mines but the grid only holds {} tiles, capping",
                remaining,
                total
            );
            remaining = total.saturating_sub(1);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while remaining > 0 {
            let coords: Coord2 = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.cols),
            );
            let tile = tiles[coords.to_nd_index()];
            if tile.is_mine() {
                continue;
            }

            tiles[coords.to_nd_index()] = tile.set_mine();
            for adjacent in tiles.iter_adjacent(coords) {
                let neighbor = tiles[adjacent.to_nd_index()];
                tiles[adjacent.to_nd_index()] = neighbor.add_neighbor();
            }
            remaining -= 1;
        }

        tiles
    }
}
