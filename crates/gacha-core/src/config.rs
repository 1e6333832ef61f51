//! Configuration for a gacha session.

use crate::engine::WIN_RATE;

/// Configuration for a [`GachaSession`](crate::session::GachaSession).
#[derive(Debug, Clone)]
pub struct GachaConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Base win chance for non-pity rolls, in `[0, 1]`.
    pub win_rate: f64,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            win_rate: WIN_RATE,
        }
    }
}

impl GachaConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the base win rate (clamped to `[0, 1]`).
    pub fn with_win_rate(mut self, win_rate: f64) -> Self {
        self.win_rate = win_rate.clamp(0.0, 1.0);
        self
    }
}
