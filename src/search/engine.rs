//! Iterative-deepening negamax with alpha-beta pruning and aspiration
//! windows.
//!
//! The engine owns a defensive copy of the game and explores it through
//! the [`Searchable`] contract alone: enumerate moves, make, recurse,
//! undo. Root candidates keep their score from the previous iteration so
//! each deeper pass tries the most promising moves first, which is what
//! makes the narrow aspiration window usually hold.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::game::{GameError, Searchable};
use crate::moves::Move;

use super::config::SearchConfig;
use super::observer::{NullObserver, SearchObserver};
use super::stats::SearchStats;

/// Stands in for ±infinity. Game evaluations must stay well below this.
pub const MAX_VAL: i32 = 1_000_000;

/// A root candidate move together with its search-assigned score.
///
/// The score is search metadata, not part of the move's identity; it
/// exists only to order candidates between deepening iterations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move itself.
    pub mv: Move,
    /// Evaluation from the mover's perspective, set once explored.
    pub score: i32,
}

impl ScoredMove {
    /// Create a scored move.
    #[must_use]
    pub const fn new(mv: Move, score: i32) -> Self {
        Self { mv, score }
    }

    /// Wrap a move that has not been explored yet. Unevaluated moves
    /// sort after every evaluated one.
    #[must_use]
    pub const fn unevaluated(mv: Move) -> Self {
        Self {
            mv,
            score: i32::MIN,
        }
    }

    /// True once the search has assigned this move a score.
    #[must_use]
    pub const fn is_evaluated(&self) -> bool {
        self.score != i32::MIN
    }
}

/// The search engine.
///
/// Construction takes the defensive copy; a failed copy fails
/// construction and no search runs.
///
/// ```
/// use gridgame::games::steppers::Steppers;
/// use gridgame::search::NegaMax;
///
/// let game = Steppers::lineup(4, 1);
/// let mut engine = NegaMax::new(&game).unwrap();
///
/// if let Some(best) = engine.think(3) {
///     println!("best: {} ({})", best.mv, best.score);
/// }
/// ```
pub struct NegaMax<G: Searchable> {
    /// Scratch game, exclusively owned and mutated during `think`.
    game: G,

    /// Search tunables.
    config: SearchConfig,

    /// Counters for the current `think` call.
    stats: SearchStats,

    /// Telemetry sink.
    observer: Box<dyn SearchObserver>,

    /// Root candidates, re-sorted by score each iteration.
    candidates: Vec<ScoredMove>,

    /// Start of the current `think` call, for the deadline check.
    started: Option<Instant>,

    /// Set when the deadline expires mid-search.
    aborted: bool,
}

impl<G: Searchable> NegaMax<G> {
    /// Create an engine for the given game with default configuration.
    pub fn new(game: &G) -> Result<Self, GameError> {
        Self::with_config(game, SearchConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(game: &G, config: SearchConfig) -> Result<Self, GameError> {
        let scratch = game.copy_game()?;
        Ok(Self {
            game: scratch,
            config,
            stats: SearchStats::default(),
            observer: Box::new(NullObserver),
            candidates: Vec::new(),
            started: None,
            aborted: false,
        })
    }

    /// Set a custom observer.
    #[must_use]
    pub fn with_observer<O: SearchObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Statistics from the most recent `think` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Root candidates with their most recent scores. Useful for
    /// diagnostics and for inspecting move ordering between depths.
    #[must_use]
    pub fn root_moves(&self) -> &[ScoredMove] {
        &self.candidates
    }

    /// Pick a move for the side to move, deepening from 1 to
    /// `max_depth`.
    ///
    /// Returns `None` when `max_depth` is zero or the position has no
    /// legal move at all; callers treat that as a forced pass or game
    /// over, never as an error.
    pub fn think(&mut self, max_depth: u32) -> Option<ScoredMove> {
        if max_depth < 1 {
            return None;
        }

        let start = Instant::now();
        self.started = Some(start);
        self.aborted = false;
        self.stats.reset();

        self.candidates = self
            .game
            .available_moves()
            .into_iter()
            .map(ScoredMove::unevaluated)
            .collect();

        let half = self.config.window_half_width;
        let mut alpha_diff = -half;
        let mut beta_diff = half;
        let mut alpha = -half;
        let mut beta = half;

        let mut best: Option<ScoredMove> = None;

        for depth in 1..=max_depth {
            self.sort_candidates();

            let accepted = loop {
                self.observer.depth_started(depth, alpha, beta);
                let result = self.negamax_root(alpha, beta, depth);
                if self.aborted {
                    break None;
                }

                let Some(found) = result else {
                    // No legal move at all: not a search fail, and
                    // deeper iterations cannot change it.
                    break None;
                };

                if found.score >= beta {
                    self.observer.fail_high(depth, &found);
                    beta = found.score + beta_diff;
                    beta_diff *= self.config.widening_factor;
                    self.stats.researches += 1;
                } else if found.score <= alpha {
                    self.observer.fail_low(depth, &found);
                    alpha = found.score + alpha_diff;
                    alpha_diff *= self.config.widening_factor;
                    self.stats.researches += 1;
                } else {
                    alpha = found.score - half;
                    beta = found.score + half;
                    alpha_diff = -half;
                    beta_diff = half;
                    self.observer.depth_accepted(depth, &found, alpha, beta);
                    break Some(found);
                }
            };

            if self.aborted {
                // Partial depth discarded; keep the previous result.
                break;
            }

            self.stats.depths_completed = depth;
            if accepted.is_some() {
                self.stats.max_depth = depth;
            }
            best = accepted;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Stable descending sort by score. Ties keep list order, so
    /// re-sorting a sorted list is a no-op.
    fn sort_candidates(&mut self) {
        self.candidates.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// One root pass at `depth` within `[alpha, beta]`.
    ///
    /// Fail-soft: the returned score may land outside the window, which
    /// is what drives the aspiration re-search in `think`.
    fn negamax_root(&mut self, alpha: i32, beta: i32, depth: u32) -> Option<ScoredMove> {
        let sign = self.game.color_to_move().sign();

        let mut local_alpha = alpha;
        let mut best_value = -MAX_VAL;
        let mut best_index: Option<usize> = None;

        for i in 0..self.candidates.len() {
            let mv = self.candidates[i].mv.clone();
            self.game.make_move(&mv);
            self.stats.nodes += 1;
            let value = -self.negamax(depth - 1, -beta, -local_alpha, -sign);
            self.game.undo_last_move();

            if self.aborted {
                return None;
            }

            self.candidates[i].score = value;

            if value > best_value {
                best_value = value;
                best_index = Some(i);
                self.observer
                    .best_move_improved(depth, &self.candidates[i], self.stats.nodes);
            }
            local_alpha = local_alpha.max(value);
            if local_alpha >= beta {
                break;
            }
        }

        best_index.map(|i| self.candidates[i].clone())
    }

    /// Recursive negamax with alpha-beta pruning.
    ///
    /// Returns only a value; moves are meaningful at the root alone.
    fn negamax(&mut self, depth: u32, alpha: i32, beta: i32, sign: i32) -> i32 {
        if self.deadline_exceeded() {
            self.aborted = true;
            return 0;
        }

        let game_over = self.game.is_over();
        if depth == 0 || game_over {
            return sign * self.game.evaluate(game_over);
        }

        let child_moves = self.game.available_moves();
        if child_moves.is_empty() {
            // Stuck but not over: score the standing position rather
            // than leaking the -MAX_VAL sentinel upward. Games that
            // allow passing surface an explicit Pass move instead.
            return sign * self.game.evaluate(false);
        }

        let mut best_value = -MAX_VAL;
        let mut local_alpha = alpha;

        for mv in &child_moves {
            self.game.make_move(mv);
            self.stats.nodes += 1;
            let value = -self.negamax(depth - 1, -beta, -local_alpha, -sign);
            self.game.undo_last_move();

            if self.aborted {
                return 0;
            }

            if value > best_value {
                best_value = value;
            }
            local_alpha = local_alpha.max(value);
            if local_alpha >= beta {
                break;
            }
        }

        best_value
    }

    fn deadline_exceeded(&self) -> bool {
        match (self.config.deadline, self.started) {
            (Some(limit), Some(started)) => started.elapsed() >= limit,
            _ => false,
        }
    }
}
