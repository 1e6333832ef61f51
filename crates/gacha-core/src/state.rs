//! The pity counter.
//!
//! Tracks consecutive losing rolls since the last win or pity payout.
//! When the counter reaches [`PITY_LIMIT`] the next roll is a guaranteed
//! top-tier win.

use serde::{Deserialize, Serialize};

/// Consecutive losses after which the next roll is a guaranteed win.
pub const PITY_LIMIT: u32 = 6;

/// Per-session roll state: the count of consecutive losing rolls.
///
/// Stays within `0..=PITY_LIMIT` at all times. One session owns one
/// `RollState`; the engine mutates it on every roll and callers read it
/// back for display ("fails: N/6"). It lives in memory only and is never
/// persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollState {
    fails: u32,
}

impl RollState {
    /// Create a roll state with the given fail count, clamped to the
    /// valid range.
    pub fn new(fails: u32) -> Self {
        Self {
            fails: fails.min(PITY_LIMIT),
        }
    }

    /// Current count of consecutive losses.
    pub fn fails(&self) -> u32 {
        self.fails
    }

    /// Whether the pity payout fires on the next roll.
    pub fn pity_ready(&self) -> bool {
        self.fails >= PITY_LIMIT
    }

    /// Record a losing roll. Saturates at [`PITY_LIMIT`].
    pub fn record_loss(&mut self) {
        self.fails = (self.fails + 1).min(PITY_LIMIT);
    }

    /// Reset the counter. Called on every win, pity or not.
    pub fn reset(&mut self) {
        self.fails = 0;
    }
}

impl Default for RollState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_zero() {
        let s = RollState::default();
        assert_eq!(s.fails(), 0);
        assert!(!s.pity_ready());
    }

    #[test]
    fn clamped_on_creation() {
        assert_eq!(RollState::new(0).fails(), 0);
        assert_eq!(RollState::new(6).fails(), 6);
        assert_eq!(RollState::new(100).fails(), 6);
    }

    #[test]
    fn record_loss_saturates_at_limit() {
        let mut s = RollState::new(5);
        s.record_loss();
        assert_eq!(s.fails(), 6);
        s.record_loss();
        assert_eq!(s.fails(), 6);
    }

    #[test]
    fn pity_ready_only_at_limit() {
        let mut s = RollState::new(5);
        assert!(!s.pity_ready());
        s.record_loss();
        assert!(s.pity_ready());
    }

    #[test]
    fn reset_clears_counter() {
        let mut s = RollState::new(6);
        s.reset();
        assert_eq!(s.fails(), 0);
        assert!(!s.pity_ready());
    }

    #[test]
    fn round_trip_serde() {
        let s = RollState::new(4);
        let json = serde_json::to_string(&s).unwrap();
        let s2: RollState = serde_json::from_str(&json).unwrap();
        assert_eq!(s2.fails(), 4);
    }
}
