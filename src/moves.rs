//! The move type.
//!
//! A `Move` is a plain value: kind, color, and the coordinates involved.
//! Search scores are deliberately not part of a move. The engine tracks
//! them in its own [`ScoredMove`](crate::search::ScoredMove) wrapper, so
//! move identity never depends on search metadata.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, PieceColor};

/// The three kinds of ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Drop a new piece on the board.
    Drop,
    /// Move a piece from one square to another.
    Jump,
    /// Don't move at all.
    Pass,
}

/// One ply by one side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    kind: MoveKind,
    color: PieceColor,
    from: Option<Coordinate>,
    to: Option<Coordinate>,
}

impl Move {
    /// A pass: the side to move does nothing.
    #[must_use]
    pub const fn pass(color: PieceColor) -> Self {
        Self {
            kind: MoveKind::Pass,
            color,
            from: None,
            to: None,
        }
    }

    /// A drop of a new piece at `to`.
    #[must_use]
    pub const fn drop_at(color: PieceColor, to: Coordinate) -> Self {
        Self {
            kind: MoveKind::Drop,
            color,
            from: None,
            to: Some(to),
        }
    }

    /// A jump of an existing piece from `from` to `to`.
    #[must_use]
    pub const fn jump(color: PieceColor, from: Coordinate, to: Coordinate) -> Self {
        Self {
            kind: MoveKind::Jump,
            color,
            from: Some(from),
            to: Some(to),
        }
    }

    /// The kind of this move.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The color making this move.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> PieceColor {
        self.color
    }

    /// The origin coordinate. `None` for passes and drops.
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Option<Coordinate> {
        self.from
    }

    /// The destination coordinate. `None` for passes.
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Option<Coordinate> {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.from, self.to) {
            (MoveKind::Pass, _, _) => write!(f, "{} pass", self.color),
            (MoveKind::Drop, _, Some(to)) => write!(f, "{} drop {}", self.color, to),
            (MoveKind::Jump, Some(from), Some(to)) => {
                write!(f, "{} {}-{}", self.color, from, to)
            }
            _ => write!(f, "{} (malformed move)", self.color),
        }
    }
}
