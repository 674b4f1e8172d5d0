//! Search module for the Othello AI
//!
//! Contains:
//! - Alpha-beta minimax over a fixed number of plies
//! - Full-width minimax used as a reference in tests and benchmarks

pub mod alphabeta;

pub use alphabeta::{SearchStats, Searcher};
