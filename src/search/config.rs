//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the iterative-deepening search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Half-width of the aspiration window (default: 50).
    /// The window re-centers to ±this around each accepted score.
    pub window_half_width: i32,

    /// Multiplier applied to the window diff after each fail high or
    /// fail low (default: 2, exponential widening).
    pub widening_factor: i32,

    /// Optional wall-clock budget for a `think` call.
    /// When exceeded, the partial depth is discarded and the best move
    /// from the last completed depth is returned. `None` means run to
    /// completion.
    pub deadline: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_half_width: 50,
            widening_factor: 2,
            deadline: None,
        }
    }
}

impl SearchConfig {
    /// Create a config with a custom aspiration half-width.
    #[must_use]
    pub fn with_window_half_width(mut self, half_width: i32) -> Self {
        assert!(half_width > 0, "Aspiration half-width must be positive");
        self.window_half_width = half_width;
        self
    }

    /// Create a config with a custom widening factor.
    #[must_use]
    pub fn with_widening_factor(mut self, factor: i32) -> Self {
        assert!(factor > 1, "Widening factor must exceed 1");
        self.widening_factor = factor;
        self
    }

    /// Create a config with a wall-clock deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
