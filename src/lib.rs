//! Othello move-selection engine
//!
//! Picks a move for one side of a standard 8x8 Othello game:
//! - Static evaluation from a positional weight table
//! - Fixed-depth minimax with alpha-beta pruning
//! - Fast paths for corners and for moves that leave the opponent stuck
//! - Per-agent weight tables that adapt once a corner is taken
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, captures and game end
//! - [`eval`]: Weight table and position evaluation
//! - [`search`]: Alpha-beta search
//! - [`engine`]: Move selection integrating all components
//! - [`agent`]: Per-side handle for a host game runtime
//! - [`game`]: Self-play between two agents
//!
//! # Quick Start
//!
//! ```
//! use othello::{Agent, Board, EngineConfig, Position, Side};
//!
//! let config = EngineConfig::new().with_depth(3);
//! let mut agent = Agent::with_config(Side::Black, &config).unwrap();
//!
//! let board = Board::new();
//! let mv = agent.select_move(&board).unwrap();
//! let board = board.apply_move(Side::Black, mv).unwrap();
//! println!("Black plays {mv}\n{board}");
//! ```
//!
//! # Move Priority
//!
//! Candidates are visited in board order. For each one:
//! 1. A corner is taken immediately
//! 2. A move after which the opponent must pass is taken immediately
//! 3. Otherwise it is searched and kept if it beats the best so far

pub mod agent;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use agent::Agent;
pub use board::{Board, Cell, Move, Side, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, EngineResult, GameError};
pub use eval::{evaluate, WeightTable};
pub use game::{play_game, GameRecord, Turn};
pub use rules::Position;
pub use search::Searcher;
