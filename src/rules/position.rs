//! The board contract consumed by evaluation and search

use crate::board::{Board, Cell, Move, Side};
use crate::error::GameError;

use super::moves;

/// Board collaborator used by the evaluator, the searcher and the engine.
///
/// Implementations are values: [`Position::apply_move`] returns a new board
/// and never touches `self`, so sibling search branches cannot see each
/// other's moves.
///
/// `legal_moves` must return moves in the same order every time it is called
/// on an unchanged board. Pruning short-circuits on that order, and the
/// engine keeps the first of equally scored moves.
pub trait Position: Copy {
    /// Legal placements for `side`; empty when `side` must pass.
    fn legal_moves(&self, side: Side) -> Vec<Move>;

    /// Board after `side` plays `mv`, with all captures applied.
    fn apply_move(&self, side: Side, mv: Move) -> Result<Self, GameError>;

    /// Contents of the square at (row, col), both in `0..8`.
    fn occupant(&self, row: u8, col: u8) -> Cell;

    fn has_legal_move(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }
}

impl Position for Board {
    #[inline]
    fn legal_moves(&self, side: Side) -> Vec<Move> {
        moves::legal_moves(self, side)
    }

    #[inline]
    fn apply_move(&self, side: Side, mv: Move) -> Result<Self, GameError> {
        moves::apply_move(self, side, mv)
    }

    #[inline]
    fn occupant(&self, row: u8, col: u8) -> Cell {
        self.get(Move::new(row, col))
    }

    #[inline]
    fn has_legal_move(&self, side: Side) -> bool {
        moves::has_legal_move(self, side)
    }
}
