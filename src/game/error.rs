//! Error types for the game-capability contract.

/// Errors surfaced across the game boundary.
///
/// The search engine itself only ever produces `CopyFailed` (at
/// construction, when the defensive game copy fails). `IllegalMove` is
/// defined here for outer layers that parse or validate moves; the core
/// consumes only pre-validated moves and never raises it.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Deep-copying a game for search failed.
    #[error("game copy failed: {message}")]
    CopyFailed { message: String },

    /// A move could not be parsed or is not legal in the position.
    #[error("illegal move: {message}")]
    IllegalMove { message: String },
}
