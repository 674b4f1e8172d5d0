//! Legal move generation and disc flipping
//!
//! Both work on raw bitboards with shift-and-mask propagation along the
//! eight directions. Bit index is `row * 8 + col`, so a left shift by one
//! moves a disc one column to the right; the file masks stop discs from
//! wrapping around to the opposite edge.

use crate::board::{Bitboard, Board, Move, Side};
use crate::error::GameError;

/// Every square except column 0
const NOT_COL_0: u64 = 0xfefe_fefe_fefe_fefe;
/// Every square except column 7
const NOT_COL_7: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// (shift, mask applied after the shift)
/// Positive shifts move toward higher indices.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, NOT_COL_0),  // East
    (-1, NOT_COL_7), // West
    (8, u64::MAX),   // South
    (-8, u64::MAX),  // North
    (9, NOT_COL_0),  // South-east
    (7, NOT_COL_7),  // South-west
    (-7, NOT_COL_0), // North-east
    (-9, NOT_COL_7), // North-west
];

#[inline]
fn shift(bits: u64, (amount, mask): (i32, u64)) -> u64 {
    if amount > 0 {
        (bits << amount) & mask
    } else {
        (bits >> -amount) & mask
    }
}

/// Bitmask of every legal placement for the owner of `own`.
pub fn legal_mask(own: u64, opp: u64) -> u64 {
    let empty = !(own | opp);
    let mut moves = 0u64;

    for dir in DIRECTIONS {
        // Opponent runs adjacent to our discs, grown up to 6 long
        let mut run = shift(own, dir) & opp;
        for _ in 0..5 {
            run |= shift(run, dir) & opp;
        }
        moves |= shift(run, dir) & empty;
    }

    moves
}

/// Discs flipped by `side` playing at `mv`; zero if the move is illegal.
pub fn flips(board: &Board, side: Side, mv: Move) -> u64 {
    if !board.is_empty(mv) {
        return 0;
    }

    let own = board.discs(side).bits();
    let opp = board.discs(side.other()).bits();
    let mut flipped = 0u64;

    for dir in DIRECTIONS {
        let mut run = 0u64;
        let mut cursor = shift(mv.bit(), dir);
        while cursor & opp != 0 {
            run |= cursor;
            cursor = shift(cursor, dir);
        }
        if cursor & own != 0 {
            flipped |= run;
        }
    }

    flipped
}

/// Legal moves for `side`, in row-major order.
///
/// The order is stable for an unchanged board; search determinism relies on it.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mask = legal_mask(board.discs(side).bits(), board.discs(side.other()).bits());
    let mut moves = Vec::with_capacity(mask.count_ones() as usize);
    let mut remaining = mask;
    while remaining != 0 {
        moves.push(Move::from_index(remaining.trailing_zeros() as usize));
        remaining &= remaining - 1;
    }
    moves
}

/// Check whether `side` has any legal placement
#[inline]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    legal_mask(board.discs(side).bits(), board.discs(side.other()).bits()) != 0
}

/// Check if a single move is legal
#[inline]
pub fn is_legal_move(board: &Board, side: Side, mv: Move) -> bool {
    flips(board, side, mv) != 0
}

/// Play `mv` for `side` on a copy of `board`.
///
/// Returns the new board; the input is left untouched.
pub fn apply_move(board: &Board, side: Side, mv: Move) -> Result<Board, GameError> {
    let flipped = flips(board, side, mv);
    if flipped == 0 {
        return Err(GameError::IllegalMove {
            row: mv.row,
            col: mv.col,
            side,
        });
    }

    let own = board.discs(side).bits() | flipped | mv.bit();
    let opp = board.discs(side.other()).bits() & !flipped;

    let mut next = *board;
    *next.discs_mut(side) = Bitboard::from_bits(own);
    *next.discs_mut(side.other()) = Bitboard::from_bits(opp);
    Ok(next)
}
