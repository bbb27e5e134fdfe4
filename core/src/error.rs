use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
