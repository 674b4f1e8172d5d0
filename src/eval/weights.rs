//! Positional weight table
//!
//! One signed weight per square: corners highest, squares that hand a corner
//! to the opponent lowest, edges and the inner ring in between.

use crate::board::{Move, BOARD_SIZE};

/// Default weights, row by row from the top.
pub const DEFAULT_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -12, 8, 6, 6, 8, -12, 100],
    [-12, -25, -4, -4, -4, -4, -25, -12],
    [8, -4, 25, 4, 4, 25, -4, 8],
    [6, -4, 4, 0, 0, 4, -4, 6],
    [6, -4, 4, 0, 0, 4, -4, 6],
    [8, -4, 25, 4, 4, 25, -4, 8],
    [-12, -25, -4, -4, -4, -4, -25, -12],
    [100, -12, 8, 6, 6, 8, -12, 100],
];

/// Weights written next to a corner once it is ours
pub struct SecuredWeight;

impl SecuredWeight {
    /// The two edge squares touching a secured corner
    pub const EDGE: i32 = 12;
    /// The diagonal square touching a secured corner
    pub const DIAGONAL: i32 = 25;
}

/// Per-engine weight table.
///
/// Starts symmetric. [`WeightTable::secure_corner`] rewrites the three
/// squares around a captured corner; the rewrite is one-way and stays for
/// the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    cells: [[i32; BOARD_SIZE]; BOARD_SIZE],
    /// Bit `i` set once `Move::CORNERS[i]` has been secured
    secured: u8,
    secured_edge: i32,
    secured_diagonal: i32,
}

impl WeightTable {
    /// Table with custom weights and the default secured-corner values.
    #[must_use]
    pub fn from_rows(cells: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells,
            secured: 0,
            secured_edge: SecuredWeight::EDGE,
            secured_diagonal: SecuredWeight::DIAGONAL,
        }
    }

    /// Override the values written around a secured corner.
    #[must_use]
    pub fn with_secured_weights(mut self, edge: i32, diagonal: i32) -> Self {
        self.secured_edge = edge;
        self.secured_diagonal = diagonal;
        self
    }

    #[inline]
    pub fn weight(&self, mv: Move) -> i32 {
        self.cells[mv.row as usize][mv.col as usize]
    }

    #[inline]
    pub fn get(&self, row: u8, col: u8) -> i32 {
        self.cells[row as usize][col as usize]
    }

    /// Largest absolute weight; `64 * max_abs_weight()` bounds any evaluation.
    pub fn max_abs_weight(&self) -> i32 {
        self.cells
            .iter()
            .flatten()
            .map(|w| w.saturating_abs())
            .max()
            .unwrap_or(0)
    }

    /// Mark `corner` as secured and raise its neighbours.
    ///
    /// Returns `false` (and changes nothing) when `corner` is not a corner
    /// or was already secured.
    pub fn secure_corner(&mut self, corner: Move) -> bool {
        let Some(slot) = corner_slot(corner) else {
            return false;
        };
        if self.secured & (1 << slot) != 0 {
            return false;
        }

        let ([first, second], diagonal) = corner_neighbours(corner);
        self.set(first, self.secured_edge);
        self.set(second, self.secured_edge);
        self.set(diagonal, self.secured_diagonal);
        self.secured |= 1 << slot;
        true
    }

    /// Whether `corner` has been secured
    pub fn is_secured(&self, corner: Move) -> bool {
        corner_slot(corner).is_some_and(|slot| self.secured & (1 << slot) != 0)
    }

    /// Corners secured so far, in [`Move::CORNERS`] order
    pub fn secured_corners(&self) -> impl Iterator<Item = Move> + '_ {
        Move::CORNERS
            .into_iter()
            .filter(move |&corner| self.is_secured(corner))
    }

    #[inline]
    fn set(&mut self, mv: Move, weight: i32) {
        self.cells[mv.row as usize][mv.col as usize] = weight;
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::from_rows(DEFAULT_WEIGHTS)
    }
}

#[inline]
fn corner_slot(mv: Move) -> Option<usize> {
    Move::CORNERS.iter().position(|&corner| corner == mv)
}

/// Edge neighbours and diagonal neighbour of a corner.
fn corner_neighbours(corner: Move) -> ([Move; 2], Move) {
    let inner_row = if corner.row == 0 { 1 } else { 6 };
    let inner_col = if corner.col == 0 { 1 } else { 6 };
    (
        [
            Move::new(corner.row, inner_col),
            Move::new(inner_row, corner.col),
        ],
        Move::new(inner_row, inner_col),
    )
}
