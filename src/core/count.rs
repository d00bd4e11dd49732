//! Piece-count snapshots.

use serde::{Deserialize, Serialize};

/// Counts of black and white pieces on a board.
///
/// Created fresh per query and never mutated after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCount {
    /// Number of black pieces.
    pub black: u32,
    /// Number of white pieces.
    pub white: u32,
}

impl PieceCount {
    /// Create a new snapshot.
    #[must_use]
    pub const fn new(black: u32, white: u32) -> Self {
        Self { black, white }
    }

    /// Total number of pieces counted.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.black + self.white
    }
}

impl std::fmt::Display for PieceCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "black={} white={}", self.black, self.white)
    }
}
