//! Compass directions for navigating a board.
//!
//! The eight directions are a fieldless enum over a constant
//! `(rise, run)` offset table: rise moves along ranks, run along files.

use serde::{Deserialize, Serialize};

/// The eight compass directions.
///
/// `index()` gives a dense 0..8 value usable for per-direction arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    E,
    W,
    S,
    NE,
    NW,
    SE,
    SW,
}

/// (rise, run) per direction, indexed by `Direction::index()`.
const OFFSETS: [(i32, i32); 8] = [
    (-1, 0),  // N
    (0, 1),   // E
    (0, -1),  // W
    (1, 0),   // S
    (-1, 1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (1, -1),  // SW
];

impl Direction {
    /// All eight directions in a fixed order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::E,
        Direction::W,
        Direction::S,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Dense index of this direction, 0..8.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank delta of this direction.
    #[inline]
    #[must_use]
    pub const fn rise(self) -> i32 {
        OFFSETS[self as usize].0
    }

    /// File delta of this direction.
    #[inline]
    #[must_use]
    pub const fn run(self) -> i32 {
        OFFSETS[self as usize].1
    }
}
