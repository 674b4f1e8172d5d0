//! Single-word bitboard for one side's discs

use super::Move;

/// One bit per square, bit index = `row * 8 + col`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, mv: Move) {
        self.bits |= mv.bit();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, mv: Move) {
        self.bits &= !mv.bit();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, mv: Move) -> bool {
        self.bits & mv.bit() != 0
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }
}
