//! Othello rules
//!
//! This module is the board collaborator the engine consumes:
//! - Legal move generation and disc flipping
//! - Game end and winner detection
//! - The [`Position`] trait the evaluator and search are written against

pub mod moves;
pub mod outcome;
pub mod position;

// Re-exports for convenient access
pub use moves::{apply_move, flips, has_legal_move, is_legal_move, legal_mask, legal_moves};
pub use outcome::{is_game_over, winner};
pub use position::Position;
