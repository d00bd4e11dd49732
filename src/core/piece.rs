//! Pieces and piece colors.
//!
//! You can have any color you want so long as it is Black or White.
//! Two pieces of the same color are interchangeable: `Piece` is a
//! copyable value object, not a unique identity.

use serde::{Deserialize, Serialize};

/// The color of a piece.
///
/// Evaluations are oriented so that positive favors White; `sign()`
/// exposes the ±1 used by the search to reorient scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The opposite color.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// +1 for White, -1 for Black.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Single-character ascii encoding (`w` / `b`).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::White => write!(f, "O"),
            PieceColor::Black => write!(f, "#"),
        }
    }
}

/// A colored token on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: PieceColor,
}

impl Piece {
    /// Create a piece of the given color.
    #[must_use]
    pub const fn new(color: PieceColor) -> Self {
        Self { color }
    }

    /// The piece's color.
    #[inline]
    #[must_use]
    pub const fn color(self) -> PieceColor {
        self.color
    }

    /// Flip this piece to the opposite color.
    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
