//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies. Runtime grows exponentially with depth.
    pub depth: u32,

    /// Seed for the move-ordering RNG.
    /// Same seed produces deterministic suggestions.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4, seed: 42 }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
