//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use std::fmt;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl From<Side> for Cell {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// A disc placement at (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    /// The four corner squares, clockwise from the top-left
    pub const CORNERS: [Move; 4] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 7 },
        Move { row: 7, col: 7 },
        Move { row: 7, col: 0 },
    ];

    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Row and column are both on an edge
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == 7) && (self.col == 0 || self.col == 7)
    }

    /// Bit for this square in a [`Bitboard`]
    #[inline]
    pub fn bit(self) -> u64 {
        1u64 << self.to_index()
    }
}

impl fmt::Display for Move {
    /// Standard notation: column letter then row number, `(2, 3)` is `d3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
