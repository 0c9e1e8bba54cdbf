//! Error types for the engine.

use thiserror::Error;

use crate::board::Player;

/// Reasons a move is rejected.
///
/// A rejected move never changes the game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cell {index} is outside the board ({cells} cells)")]
    OutOfRange { index: usize, cells: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("game already won by {winner}")]
    GameOver { winner: Player },

    #[error("it is the computer's turn")]
    NotYourTurn,
}

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("failed to encode snapshot: {0}")]
    SnapshotEncoding(String),

    #[error("board size {size} is not supported (must be {min}-{max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("invalid coordinate '{0}'")]
    InvalidCoord(String),

    #[error("unknown player '{0}' (expected x or o)")]
    UnknownPlayer(String),

    #[error("unknown difficulty '{0}' (expected easy, normal or hard)")]
    UnknownDifficulty(String),
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedSnapshot(message.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
