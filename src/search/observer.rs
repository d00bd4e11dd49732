//! Telemetry hooks for the search.
//!
//! The engine never prints. Instead it invokes a [`SearchObserver`] at
//! the points where progress is interesting: a deepening iteration
//! starting, the root best move improving, aspiration fail highs and
//! lows, and a depth's result being accepted. Observers are injected
//! with [`NegaMax::with_observer`](super::NegaMax::with_observer).

use super::engine::ScoredMove;

/// Hooks invoked during a `think` call. All methods default to no-ops,
/// so observers implement only what they care about.
pub trait SearchObserver {
    /// A root search pass is starting at `depth` with the given window.
    fn depth_started(&mut self, _depth: u32, _alpha: i32, _beta: i32) {}

    /// The root found a new best move. `nodes` is the running node count.
    fn best_move_improved(&mut self, _depth: u32, _best: &ScoredMove, _nodes: u64) {}

    /// The root score reached or exceeded beta; the window widens upward
    /// and the depth is re-searched.
    fn fail_high(&mut self, _depth: u32, _result: &ScoredMove) {}

    /// The root score fell at or below alpha; the window widens downward
    /// and the depth is re-searched.
    fn fail_low(&mut self, _depth: u32, _result: &ScoredMove) {}

    /// A depth finished inside the window with this result.
    fn depth_accepted(&mut self, _depth: u32, _best: &ScoredMove, _alpha: i32, _beta: i32) {}
}

/// Observer that ignores everything. The engine's default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Observer that emits `tracing` events at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn depth_started(&mut self, depth: u32, alpha: i32, beta: i32) {
        tracing::debug!(depth, alpha, beta, "search pass started");
    }

    fn best_move_improved(&mut self, depth: u32, best: &ScoredMove, nodes: u64) {
        tracing::debug!(depth, score = best.score, nodes, %best.mv, "new best move");
    }

    fn fail_high(&mut self, depth: u32, result: &ScoredMove) {
        tracing::debug!(depth, score = result.score, %result.mv, "failed high");
    }

    fn fail_low(&mut self, depth: u32, result: &ScoredMove) {
        tracing::debug!(depth, score = result.score, %result.mv, "failed low");
    }

    fn depth_accepted(&mut self, depth: u32, best: &ScoredMove, alpha: i32, beta: i32) {
        tracing::debug!(depth, score = best.score, alpha, beta, %best.mv, "depth accepted");
    }
}
