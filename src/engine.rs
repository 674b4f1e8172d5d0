//! Move selection
//!
//! The engine walks the legal moves in the order the board produces them:
//!
//! 1. **Corner**: a corner move is played at once, corners can never be
//!    flipped back.
//! 2. **Forced pass**: a move that leaves the opponent without a reply is
//!    played at once.
//! 3. **Alpha-beta**: every other candidate is scored by searching
//!    `search_depth` plies below it; the first strictly best score wins.
//!
//! After the decision, a chosen corner secures that corner in the engine's
//! weight table, which stays rewritten for the rest of the game.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, EngineConfig, Side};
//!
//! let config = EngineConfig::new().with_depth(2);
//! let mut engine = AIEngine::with_config(&config).unwrap();
//!
//! let result = engine.choose_move(&Board::new(), Side::Black).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::board::{Move, Side};
use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError, EngineResult};
use crate::eval::{evaluate, WeightTable};
use crate::rules::Position;
use crate::search::{SearchStats, Searcher};

/// Which rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Took an available corner
    Corner,
    /// Left the opponent with no legal reply
    ForcedPass,
    /// Best score from alpha-beta search
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move to play
    pub best_move: Move,
    /// Search score for alpha-beta moves; static evaluation of the
    /// resulting board for the fast paths
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Node, leaf, cutoff and pass counts of the alpha-beta searches
    pub stats: SearchStats,
}

/// Move selector for one game.
///
/// Owns its weight table, so engines never share corner corrections.
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    weights: WeightTable,
}

impl AIEngine {
    /// Create an engine with default settings (depth 6, default weights).
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            weights: config.weight_table(),
            config,
        }
    }

    /// Create an engine from a validated configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            weights: config.weight_table(),
            config: config.clone(),
        })
    }

    /// Get the best move for `side`.
    ///
    /// Convenience wrapper around [`AIEngine::choose_move`].
    pub fn get_move<P: Position>(&mut self, board: &P, side: Side) -> EngineResult<Move> {
        self.choose_move(board, side).map(|result| result.best_move)
    }

    /// Choose a move for `side` and report how it was found.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLegalMoves`] if `side` has to pass; the caller
    ///   must only ask for a move when one exists.
    /// - [`EngineError::Game`] if the board rejects a move it listed as legal.
    pub fn choose_move<P: Position>(&mut self, board: &P, side: Side) -> EngineResult<MoveResult> {
        let start = Instant::now();

        let moves = board.legal_moves(side);
        let Some(&first) = moves.first() else {
            return Err(EngineError::NoLegalMoves { side });
        };

        let opponent = side.other();
        let depth = self.config.search_depth;

        let result = {
            let mut searcher = Searcher::new(side, &self.weights);
            let mut best_move = first;
            let mut best_score = i32::MIN;
            let mut fast_path = None;

            for &mv in &moves {
                if mv.is_corner() {
                    let child = board.apply_move(side, mv)?;
                    fast_path = Some((mv, evaluate(&child, side, &self.weights), SearchType::Corner));
                    break;
                }

                let child = board.apply_move(side, mv)?;
                if !child.has_legal_move(opponent) {
                    fast_path = Some((
                        mv,
                        evaluate(&child, side, &self.weights),
                        SearchType::ForcedPass,
                    ));
                    break;
                }

                let score = searcher.search(&child, opponent, depth, best_score, i32::MAX)?;
                trace!(%side, candidate = %mv, score, "candidate searched");
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
            }

            let (best_move, score, search_type) =
                fast_path.unwrap_or((best_move, best_score, SearchType::AlphaBeta));
            MoveResult {
                best_move,
                score,
                search_type,
                time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                stats: *searcher.stats(),
            }
        };

        if result.best_move.is_corner() && self.weights.secure_corner(result.best_move) {
            info!(%side, corner = %result.best_move, "corner secured, neighbouring weights raised");
        }

        debug!(
            %side,
            best_move = %result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms = result.time_ms,
            candidates = moves.len(),
            "move chosen"
        );

        Ok(result)
    }

    /// Restore the configured weight table for a new game.
    pub fn new_game(&mut self) {
        self.weights = self.config.weight_table();
    }

    /// Get the current search depth.
    #[must_use]
    pub fn search_depth(&self) -> u8 {
        self.config.search_depth
    }

    /// Current weight table, corner corrections included.
    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
