//! Evaluation module for Othello positions
//!
//! A single positional term: the weight table decides how much each
//! occupied square is worth to its owner.

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::{SecuredWeight, WeightTable, DEFAULT_WEIGHTS};
