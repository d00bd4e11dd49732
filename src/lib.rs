//! # gridgame
//!
//! A generic engine for two-color, turn-based board games on a
//! rectangular grid.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No rule set is hardcoded. The search sees a
//!    game only through the `Searchable` capability contract.
//!
//! 2. **Geometry Precomputed**: The board builds every square's
//!    one-away ring, two-away ring (knight jumps included), and
//!    per-direction neighbor exactly once; move generation never
//!    re-derives adjacency.
//!
//! 3. **Make/Undo over Cloning**: The search mutates one scratch game
//!    in place with strictly nested make/undo pairs. Nothing is cloned
//!    on the hot path.
//!
//! ## Architecture
//!
//! - **Arena board**: squares live in a flat rank-major `Vec` and
//!   reference their neighbors by `SquareId` index, so neighbor caches
//!   are plain data with no ownership cycles.
//!
//! - **Iterative deepening + aspiration**: each depth re-sorts the root
//!   candidates by the previous depth's scores and searches inside a
//!   narrow window, widening exponentially on fail high/low.
//!
//! - **Injectable telemetry**: the engine reports progress through a
//!   `SearchObserver` instead of printing.
//!
//! ## Modules
//!
//! - `core`: coordinates, directions, pieces, piece counts
//! - `board`: squares, the board arena, adjacency caches
//! - `moves`: the move value type
//! - `game`: the `Searchable` contract and game errors
//! - `search`: the negamax engine, config, stats, observers
//! - `games`: the steppers test-bed game

pub mod board;
pub mod core;
pub mod game;
pub mod games;
pub mod moves;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Coordinate, Direction, Piece, PieceColor, PieceCount};

pub use crate::board::{Board, Square, SquareId, SquareKind};

pub use crate::moves::{Move, MoveKind};

pub use crate::game::{generic_is_over, GameError, Searchable};

pub use crate::search::{
    NegaMax, NullObserver, ScoredMove, SearchConfig, SearchObserver, SearchStats, TraceObserver,
    MAX_VAL,
};
