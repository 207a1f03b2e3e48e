use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Board dimensions out of range")]
    InvalidDimensions,
    #[error("Mine count out of range")]
    InvalidMineCount,
    #[error("Tile rows do not form a usable rectangle")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
