//! Error type shared by the board, the game session and the console.

use thiserror::Error;

/// Errors surfaced to callers of the game engine.
///
/// Coordinates are reported 1-indexed, the way the player typed them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("no empty cells left on the board")]
    BoardFull,

    #[error("invalid coordinate '{0}', expected '<row> <col>'")]
    InvalidCoordinate(String),

    #[error("the game is already over")]
    GameOver,
}
