//! The game-capability contract consumed by the search engine.
//!
//! A concrete game implements [`Searchable`] to define turn state, move
//! enumeration, make/undo, the terminal test, and static evaluation. The
//! engine depends on nothing else and never interprets game-specific
//! rules.

use crate::board::Board;
use crate::moves::Move;
use crate::core::PieceColor;

use super::error::GameError;

/// A game the adversarial search can explore.
///
/// ## Contracts
///
/// - `make_move` does no legality re-validation; callers pass only moves
///   obtained from `available_moves`.
/// - `undo_last_move` restores the state to exactly before the most
///   recent `make_move`: board occupancy, captured or flipped pieces,
///   and the color to move. Make/undo pairs are strictly nested.
/// - `evaluate` is oriented so positive favors White, and its magnitude
///   must stay well below the engine's sentinel
///   ([`MAX_VAL`](crate::search::MAX_VAL)).
pub trait Searchable {
    /// Check if the game is over.
    fn is_over(&self) -> bool;

    /// Static evaluation of the position from White's perspective.
    ///
    /// `game_over` tells the game the position is terminal, so it can
    /// score decisive results instead of static features.
    fn evaluate(&self, game_over: bool) -> i32;

    /// The color whose turn it is.
    fn color_to_move(&self) -> PieceColor;

    /// Enumerate the legal moves for the side to move.
    ///
    /// May be empty; an empty list is a valid pass/terminal condition,
    /// not an error. Games that allow passing must surface an explicit
    /// Pass move here.
    fn available_moves(&self) -> Vec<Move>;

    /// Apply a legal move, mutating the game in place.
    fn make_move(&mut self, mv: &Move);

    /// Take back the most recent move.
    fn undo_last_move(&mut self);

    /// Make an independent deep copy usable as a search scratch game.
    fn copy_game(&self) -> Result<Self, GameError>
    where
        Self: Sized;
}

/// Generic terminal test reusable by games without special end rules:
/// the game is over when the board is full or either color has no
/// pieces left.
#[must_use]
pub fn generic_is_over(board: &Board) -> bool {
    let count = board.piece_count();
    count.total() == board.num_playable_squares() || count.black == 0 || count.white == 0
}
