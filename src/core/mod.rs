//! Core value types: coordinates, directions, pieces, piece counts.
//!
//! These are the game-agnostic building blocks shared by the board model,
//! the move type, and the search engine.

pub mod coordinate;
pub mod count;
pub mod direction;
pub mod piece;

pub use coordinate::Coordinate;
pub use count::PieceCount;
pub use direction::Direction;
pub use piece::{Piece, PieceColor};
