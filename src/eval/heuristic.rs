//! Static evaluation of a board position
//!
//! Used only at the search horizon. It measures who holds the strategically
//! valuable squares; it does not detect won or lost games.

use crate::board::{Cell, Side, BOARD_SIZE};
use crate::rules::Position;

use super::weights::WeightTable;

/// Evaluate the board from the perspective of `perspective`.
///
/// Adds the weight of every square `perspective` owns and subtracts the
/// weight of every square the opponent owns. Empty squares count zero.
///
/// Cannot overflow for tables built from a configuration that passed
/// [`EngineConfig::validate`](crate::config::EngineConfig::validate).
///
/// Antisymmetric for a fixed table:
/// `evaluate(b, s, w) == -evaluate(b, s.other(), w)`.
#[must_use]
pub fn evaluate<P: Position>(board: &P, perspective: Side, weights: &WeightTable) -> i32 {
    let own = Cell::from(perspective);
    let opp = Cell::from(perspective.other());
    let mut score = 0;

    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let cell = board.occupant(row, col);
            if cell == own {
                score += weights.get(row, col);
            } else if cell == opp {
                score -= weights.get(row, col);
            }
        }
    }

    score
}
