//! Adversarial search.
//!
//! ## Overview
//!
//! Iterative-deepening negamax with alpha-beta pruning and aspiration
//! windows. The engine sees a game only through the
//! [`Searchable`](crate::game::Searchable) contract:
//!
//! - **Iterative deepening**: depths 1..=N, each feeding move ordering
//!   for the next.
//! - **Aspiration windows**: a narrow ±50 window around the previous
//!   score, widened exponentially on fail high/low.
//! - **Fail-soft root**: the root reports scores outside the window,
//!   which is what triggers the re-search.
//! - **Injectable telemetry**: observers hook the progress points
//!   instead of the engine printing anything.
//!
//! ## Usage
//!
//! ```
//! use gridgame::games::steppers::Steppers;
//! use gridgame::search::{NegaMax, SearchConfig, TraceObserver};
//!
//! let game = Steppers::lineup(5, 3);
//! let mut engine = NegaMax::with_config(&game, SearchConfig::default())
//!     .unwrap()
//!     .with_observer(TraceObserver);
//!
//! let best = engine.think(4);
//! assert!(best.is_some());
//! ```

pub mod config;
pub mod engine;
pub mod observer;
pub mod stats;

pub use config::SearchConfig;
pub use engine::{NegaMax, ScoredMove, MAX_VAL};
pub use observer::{NullObserver, SearchObserver, TraceObserver};
pub use stats::SearchStats;
