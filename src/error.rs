//! Error types for the Othello engine

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Side;

/// Errors raised by the board and its rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move does not flip anything or targets an occupied square
    #[error("illegal move for {side}: ({row}, {col})")]
    IllegalMove { row: u8, col: u8, side: Side },

    #[error("board text has {got} cells, expected {expected}")]
    ParseLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at ({row}, {col})")]
    ParseCell { character: char, row: usize, col: usize },
}

/// Errors raised while choosing a move
#[derive(Error, Debug)]
pub enum EngineError {
    /// Move selection was requested for a side that cannot move
    #[error("no legal moves available for {side}")]
    NoLegalMoves { side: Side },

    /// An agent was asked to play the other colour
    #[error("agent plays {got} but it is {expected}'s turn")]
    SideMismatch { expected: Side, got: Side },

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u8, max: u8 },

    /// A weight large enough to overflow a 64-square evaluation
    #[error("weight magnitude {weight} exceeds the maximum of {max}")]
    WeightOutOfRange { weight: i32, max: i32 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
