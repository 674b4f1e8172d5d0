//! Shared helpers for unit tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Side};
use crate::rules::{apply_move, is_game_over, legal_moves};

/// Play up to `plies` random legal moves from the start position.
///
/// Returns the board and the side to move. Passes are taken when forced;
/// stops early if the game ends.
pub fn random_position(seed: u64, plies: usize) -> (Board, Side) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut to_move = Side::Black;

    for _ in 0..plies {
        if is_game_over(&board) {
            break;
        }
        let moves = legal_moves(&board, to_move);
        if moves.is_empty() {
            to_move = to_move.other();
            continue;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        board = apply_move(&board, to_move, mv).expect("generated move is legal");
        to_move = to_move.other();
    }

    (board, to_move)
}
