//! The game-capability contract.
//!
//! The search engine sees a game only through the [`Searchable`] trait;
//! concrete rules live entirely on the game side of the boundary.

pub mod error;
pub mod searchable;

pub use error::GameError;
pub use searchable::{generic_is_over, Searchable};
