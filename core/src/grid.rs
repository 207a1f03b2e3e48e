use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A game snapshot: the tile matrix plus the status derived from it.
///
/// Mutating operations never touch the receiver; they hand back a new,
/// independent grid. Callers keep every prior snapshot valid, which is what
/// lets a host replay a persisted move log against a stored base grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    status: GameStatus,
}

impl Grid {
    /// Fresh grid: the generator places mines and finalizes neighbor
    /// counts, every tile starts hidden.
    pub fn generate(config: GridConfig, generator: impl MineGenerator) -> Grid {
        let tiles = generator.generate(config);
        let mine_count = count_mines(&tiles);
        if mine_count != config.mines {
            log::warn!(
                "Generated grid holds {} mines, requested {}",
                mine_count,
                config.mines
            );
        }
        Self {
            tiles,
            mine_count,
            status: GameStatus::InProgress,
        }
    }

    /// Reconstructs a grid from a persisted tile matrix. The matrix is
    /// trusted to carry correct neighbor counts already; only the mine
    /// total and the status are recomputed.
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Grid> {
        let (rows, cols) = tiles.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX as usize || cols > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }
        let mine_count = count_mines(&tiles);
        let mut grid = Self {
            tiles,
            mine_count,
            status: GameStatus::InProgress,
        };
        grid.status = grid.evaluate_status();
        Ok(grid)
    }

    /// Reconstructs a grid from the nested-row wire form.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Grid> {
        let num_cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut flat = Vec::with_capacity(rows.len() * num_cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(GameError::InvalidBoardShape);
            }
            flat.extend(row.iter().copied().map(Tile::from_raw));
        }
        let tiles = Array2::from_shape_vec((rows.len(), num_cols), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_tiles(tiles)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (
            dim.0.try_into().expect("row count fits a Coord"),
            dim.1.try_into().expect("col count fits a Coord"),
        )
    }

    pub fn num_rows(&self) -> Coord {
        self.size().0
    }

    pub fn num_cols(&self) -> Coord {
        self.size().1
    }

    pub fn num_mines(&self) -> CellCount {
        self.mine_count
    }

    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    /// The nested-row wire form hosts persist.
    pub fn to_rows(&self) -> Vec<Vec<u16>> {
        self.tiles
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|tile| tile.raw()).collect())
            .collect()
    }

    /// Mines minus placed flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        let flagged = self.tiles.iter().filter(|tile| tile.is_flag()).count();
        self.mine_count as isize - flagged as isize
    }

    /// Derives the status from the tiles alone. A visible mine loses
    /// regardless of anything else, so that check runs first; winning
    /// needs every safe tile visible, so the scan cannot stop early on
    /// the win side.
    pub fn evaluate_status(&self) -> GameStatus {
        let mut all_safe_visible = true;
        for &tile in self.tiles.iter() {
            if tile.is_visible() && tile.is_mine() {
                return GameStatus::Lost;
            }
            if !tile.is_mine() && !tile.is_visible() {
                all_safe_visible = false;
            }
        }
        if all_safe_visible {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Coordinates the cascade may expand into from `coords`: nothing for
    /// a tile with adjacent mines, otherwise every in-bounds neighbor not
    /// yet visible.
    pub fn neighbors_to_reveal(&self, coords: Coord2) -> SmallVec<[Coord2; 8]> {
        if self.tile_at(coords).count_neighbors() != 0 {
            return SmallVec::new();
        }
        self.tiles
            .iter_adjacent(coords)
            .filter(|&pos| !self.tile_at(pos).is_visible())
            .collect()
    }

    /// Reveals the tile at `coords`, producing the next snapshot.
    ///
    /// A mine target makes only that tile visible and loses the game;
    /// anything else floods outward through zero-count tiles and then
    /// re-derives the status.
    pub fn reveal_tile(&self, coords: Coord2) -> Result<Grid> {
        self.check_in_progress()?;
        let coords = self.validate_coords(coords)?;
        let tile = self.tile_at(coords);
        if tile.is_visible() {
            return Err(GameError::InvalidMove);
        }

        let mut next = self.clone();
        if tile.is_mine() {
            next.tiles[coords.to_nd_index()] = tile.set_visible();
            next.status = GameStatus::Lost;
            log::debug!("Revealed mine at {:?}", coords);
        } else {
            next.flood_reveal(coords);
            next.status = next.evaluate_status();
        }
        Ok(next)
    }

    /// Toggles the flag on the tile at `coords`, producing the next
    /// snapshot. Flagging never changes visibility or the status.
    pub fn set_flag(&self, coords: Coord2) -> Result<Grid> {
        self.check_in_progress()?;
        let coords = self.validate_coords(coords)?;
        let tile = self.tile_at(coords);
        if tile.is_visible() {
            return Err(GameError::InvalidMove);
        }

        let mut next = self.clone();
        next.tiles[coords.to_nd_index()] = if tile.is_flag() {
            tile.unset_flag()
        } else {
            tile.set_flag()
        };
        Ok(next)
    }

    /// Breadth-first cascade over an explicit work-list. A coordinate may
    /// be queued more than once; the visibility check on pop makes the
    /// second visit a no-op.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut pending = VecDeque::from([start]);
        while let Some(coords) = pending.pop_front() {
            let tile = self.tile_at(coords);
            if tile.is_visible() {
                continue;
            }
            self.tiles[coords.to_nd_index()] = tile.set_visible();
            log::trace!(
                "Revealed tile at {:?}, adjacent mines: {}",
                coords,
                tile.count_neighbors()
            );
            pending.extend(self.neighbors_to_reveal(coords));
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if matches!(self.status, GameStatus::InProgress) {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidMove)
        }
    }
}

fn count_mines(tiles: &Array2<Tile>) -> CellCount {
    tiles
        .iter()
        .filter(|tile| tile.is_mine())
        .count()
        .try_into()
        .expect("mine count fits a CellCount")
}
