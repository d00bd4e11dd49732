//! The board and square model.
//!
//! `Board` owns every square in a flat rank-major arena; squares point at
//! their neighbors by [`SquareId`] index. Neighbor caches (one-away ring,
//! two-away ring including knight jumps, per-direction lookup) are
//! precomputed once so move generation never re-derives geometry.

pub mod grid;
pub mod square;

pub use grid::Board;
pub use square::{Square, SquareId, SquareKind};
