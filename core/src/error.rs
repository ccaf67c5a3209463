use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be a non-empty square grid")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
