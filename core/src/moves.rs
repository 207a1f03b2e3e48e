use serde::{Deserialize, Serialize};

use crate::*;

/// Action code for a logged move, serialized as the single-letter code
/// hosts keep in their move logs.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveAction {
    #[serde(rename = "R")]
    Reveal,
    #[serde(rename = "F")]
    Flag,
}

/// One entry of a per-game move log.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub action: MoveAction,
    pub row: Coord,
    pub col: Coord,
}

impl Move {
    pub const fn reveal(row: Coord, col: Coord) -> Self {
        Self {
            action: MoveAction::Reveal,
            row,
            col,
        }
    }

    pub const fn flag(row: Coord, col: Coord) -> Self {
        Self {
            action: MoveAction::Flag,
            row,
            col,
        }
    }
}

impl Grid {
    /// Applies one logged move, producing the next snapshot.
    pub fn apply(&self, mv: Move) -> Result<Grid> {
        match mv.action {
            MoveAction::Reveal => self.reveal_tile((mv.row, mv.col)),
            MoveAction::Flag => self.set_flag((mv.row, mv.col)),
        }
    }

    /// Replays a move log against this grid. The host supplies the moves
    /// already sorted by sequence number; the first invalid move aborts
    /// the fold with its error and no partial state escapes.
    pub fn replay<I>(&self, moves: I) -> Result<Grid>
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .try_fold(self.clone(), |grid, mv| grid.apply(mv))
    }
}
