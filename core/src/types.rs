use ndarray::Array2;

/// Row or column index; boards never exceed 20 cells per side.
pub type Coord = u8;

/// Mine and tile totals; a full board holds at most 400 cells.
pub type CellCount = u16;

/// `(row, col)` position on the grid, row-major.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Saturating area product, used wherever a board size becomes a count.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

const ADJACENT_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub trait AdjacentExt {
    /// Iterates the in-bounds 8-neighborhood of `center`.
    fn iter_adjacent(&self, center: Coord2) -> AdjacentIter;
}

impl<T> AdjacentExt for Array2<T> {
    fn iter_adjacent(&self, center: Coord2) -> AdjacentIter {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().expect("row count fits a Coord"),
            dim.1.try_into().expect("col count fits a Coord"),
        );
        AdjacentIter {
            center,
            bounds,
            cursor: 0,
        }
    }
}

/// Owns its whole state, leaving the source array free for mutation while
/// coordinates are consumed.
#[derive(Debug)]
pub struct AdjacentIter {
    center: Coord2,
    bounds: Coord2,
    cursor: usize,
}

impl Iterator for AdjacentIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Coord2> {
        while let Some(&(row_delta, col_delta)) = ADJACENT_OFFSETS.get(self.cursor) {
            self.cursor += 1;

            let row = match self.center.0.checked_add_signed(row_delta) {
                Some(row) if row < self.bounds.0 => row,
                _ => continue,
            };
            let col = match self.center.1.checked_add_signed(col_delta) {
                Some(col) if col < self.bounds.1 => col,
                _ => continue,
            };
            return Some((row, col));
        }
        None
    }
}
