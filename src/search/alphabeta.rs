//! Minimax search with alpha-beta pruning
//!
//! Scores are always from the fixed perspective of the agent that started
//! the search: the agent's plies maximize, the opponent's plies minimize.
//!
//! # Passing
//!
//! A side with no legal move passes: the other side moves next at the same
//! remaining depth. When neither side can move the game is over and the
//! position is scored like a horizon leaf.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Side};
//! use othello::eval::WeightTable;
//! use othello::search::Searcher;
//!
//! let weights = WeightTable::default();
//! let mut searcher = Searcher::new(Side::Black, &weights);
//!
//! let score = searcher
//!     .search(&Board::new(), Side::Black, 3, i32::MIN, i32::MAX)
//!     .unwrap();
//! assert!(score.abs() <= 64 * weights.max_abs_weight());
//! ```

use crate::board::Side;
use crate::error::GameError;
use crate::eval::{evaluate, WeightTable};
use crate::rules::Position;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Positions scored by the evaluator
    pub leaves: u64,
    /// Move loops stopped early by the bounds crossing
    pub cutoffs: u64,
    /// Turns handed to the other side for lack of moves
    pub passes: u64,
}

/// Depth-limited searcher bound to one agent and its weight table.
pub struct Searcher<'a> {
    agent: Side,
    weights: &'a WeightTable,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(agent: Side, weights: &'a WeightTable) -> Self {
        Self {
            agent,
            weights,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best score reachable for the agent within `depth` plies.
    ///
    /// `alpha`/`beta` bound the scores that still matter to the caller. A
    /// node stops expanding once `beta < alpha` and returns the running
    /// extreme it has seen so far. With `(i32::MIN, i32::MAX)` the result is
    /// exactly the full-width minimax value (see [`Searcher::minimax`]).
    ///
    /// Errors only when the board rejects one of its own legal moves.
    pub fn search<P: Position>(
        &mut self,
        board: &P,
        to_move: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, GameError> {
        self.stats.nodes += 1;

        if depth == 0 {
            return Ok(self.leaf(board));
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            if !board.has_legal_move(to_move.other()) {
                return Ok(self.leaf(board));
            }
            self.stats.passes += 1;
            return self.search(board, to_move.other(), depth, alpha, beta);
        }

        if to_move == self.agent {
            let mut best = i32::MIN;
            for mv in moves {
                let child = board.apply_move(to_move, mv)?;
                let value = self.search(&child, to_move.other(), depth - 1, alpha, beta)?;
                best = best.max(value);
                alpha = alpha.max(value);
                if beta < alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let child = board.apply_move(to_move, mv)?;
                let value = self.search(&child, to_move.other(), depth - 1, alpha, beta)?;
                best = best.min(value);
                beta = beta.min(value);
                if beta < alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        }
    }

    /// Full-width minimax without pruning, same pass rule as [`Searcher::search`].
    ///
    /// Reference for checking the pruned search; exponential, keep `depth` small.
    pub fn minimax<P: Position>(
        &mut self,
        board: &P,
        to_move: Side,
        depth: u8,
    ) -> Result<i32, GameError> {
        self.stats.nodes += 1;

        if depth == 0 {
            return Ok(self.leaf(board));
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            if !board.has_legal_move(to_move.other()) {
                return Ok(self.leaf(board));
            }
            self.stats.passes += 1;
            return self.minimax(board, to_move.other(), depth);
        }

        let maximizing = to_move == self.agent;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let child = board.apply_move(to_move, mv)?;
            let value = self.minimax(&child, to_move.other(), depth - 1)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }

    #[inline]
    fn leaf<P: Position>(&mut self, board: &P) -> i32 {
        self.stats.leaves += 1;
        evaluate(board, self.agent, self.weights)
    }
}
