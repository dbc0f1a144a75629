//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between a move submission and its resolution.
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(1500);

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long a submitted turn stays in `AwaitingResolution`.
    /// Not correctness-critical; zero resolves on the next timer tick.
    pub resolution_delay: Duration,

    /// Seed for the default uniform opponent.
    /// Same seed produces the same opponent moves.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a new config with a custom resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
