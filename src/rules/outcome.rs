//! Game end and winner detection

use crate::board::{Board, Side};

use super::moves::has_legal_move;

/// Neither side can place a disc.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}

/// Side with more discs once the game is over.
///
/// `None` while the game is still in progress or on a draw.
pub fn winner(board: &Board) -> Option<Side> {
    if !is_game_over(board) {
        return None;
    }

    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Side::Black),
        std::cmp::Ordering::Less => Some(Side::White),
        std::cmp::Ordering::Equal => None,
    }
}
