//! The outcome decision function.
//!
//! One roll, evaluated in a fixed order: pity check, win/loss draw,
//! then either tier mapping plus item pick (win) or a saturating bump of
//! the pity counter (loss).

use crate::item;
use crate::outcome::Outcome;
use crate::rng::UnitRandom;
use crate::state::RollState;
use crate::tier::Tier;

/// Base chance that a non-pity roll wins.
pub const WIN_RATE: f64 = 0.16;

/// Banner text on a pity payout.
pub const PITY_HEADER: &str = "Guaranteed!";

/// Banner text on a loss.
pub const MISS_HEADER: &str = "Miss...";

/// Roll the gacha once, mutating `state` in place.
///
/// The mutation is part of the contract: callers read `state.fails()`
/// afterward for display. `charge` is clamped to `[0, 1]` internally, so
/// raw input is fine.
///
/// Draw order is observable and fixed. The pity path consumes no
/// randomness at all. A non-pity roll draws once for the win/loss
/// decision (`draw < WIN_RATE` wins; a draw exactly equal to the rate
/// loses) and, on a win, draws a **second, independent** value to pick
/// the item within the tier — deterministic test sequences for a winning
/// roll therefore supply two values.
pub fn roll_once<R: UnitRandom + ?Sized>(
    state: &mut RollState,
    charge: f64,
    rng: &mut R,
) -> Outcome {
    roll_once_with_rate(state, charge, rng, WIN_RATE)
}

/// [`roll_once`] with an explicit win rate instead of [`WIN_RATE`].
pub fn roll_once_with_rate<R: UnitRandom + ?Sized>(
    state: &mut RollState,
    charge: f64,
    rng: &mut R,
    win_rate: f64,
) -> Outcome {
    if state.pity_ready() {
        state.reset();
        return Outcome::Win {
            tier: Tier::SuperRare,
            pity: true,
            item: item::PITY_JACKPOT,
            header: Some(PITY_HEADER),
        };
    }

    if rng.next_unit() < win_rate {
        state.reset();
        let tier = Tier::from_charge(charge);
        let item = item::pick(item::pool(tier), rng);
        return Outcome::Win {
            tier,
            pity: false,
            item,
            header: None,
        };
    }

    state.record_loss();
    Outcome::Loss {
        item: item::CONSOLATION,
        header: Some(MISS_HEADER),
    }
}
