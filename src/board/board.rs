//! Board structure and its text format

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Move, Side, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board: one bitboard per side.
///
/// `Copy`: every search branch owns its own board value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black discs
    pub black: Bitboard,
    /// White discs
    pub white: Bitboard,
}

impl Board {
    /// Standard starting position: White on d4/e5, Black on e4/d5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Move::new(3, 3), Side::White);
        board.set(Move::new(4, 4), Side::White);
        board.set(Move::new(3, 4), Side::Black);
        board.set(Move::new(4, 3), Side::Black);
        board
    }

    /// Board with no discs
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        if self.black.get(mv) {
            Cell::Black
        } else if self.white.get(mv) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, mv: Move) -> bool {
        !self.black.get(mv) && !self.white.get(mv)
    }

    /// Place a disc for `side`, replacing whatever was there.
    /// No flipping; use [`crate::rules::apply_move`] for game moves.
    #[inline]
    pub fn set(&mut self, mv: Move, side: Side) {
        self.remove(mv);
        self.discs_mut(side).set(mv);
    }

    /// Remove a disc
    #[inline]
    pub fn remove(&mut self, mv: Move) {
        self.black.clear(mv);
        self.white.clear(mv);
    }

    /// Bitboard for a side
    #[inline]
    pub fn discs(&self, side: Side) -> &Bitboard {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    #[inline]
    pub fn discs_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    /// Disc count for a side
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.discs(side).count()
    }

    /// Number of empty squares
    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.black.count() - self.white.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Eight rows of `.`, `B`, `W`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let c = match self.get(Move::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses 64 cell characters in row-major order. Whitespace is ignored,
    /// so one row per line works as well as a single line.
    /// `.`/`-` empty, `B`/`X` black, `W`/`O` white.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != TOTAL_CELLS {
            return Err(GameError::ParseLength {
                expected: TOTAL_CELLS,
                got: cells.len(),
            });
        }

        let mut board = Board::empty();
        for (idx, &character) in cells.iter().enumerate() {
            let mv = Move::from_index(idx);
            match character {
                '.' | '-' => {}
                'B' | 'b' | 'X' | 'x' => board.set(mv, Side::Black),
                'W' | 'w' | 'O' | 'o' => board.set(mv, Side::White),
                _ => {
                    return Err(GameError::ParseCell {
                        character,
                        row: mv.row as usize,
                        col: mv.col as usize,
                    })
                }
            }
        }
        Ok(board)
    }
}
