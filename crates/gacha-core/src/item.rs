//! Static reward data.
//!
//! Each tier has a fixed, non-empty pool of items a win can grant.
//! Pool order carries no meaning and duplicates are allowed — a duplicated
//! entry simply gets picked proportionally more often. Two items live
//! outside the pools: the pity jackpot (granted only when the pity counter
//! fires) and the consolation item every losing roll carries.

use serde::Serialize;

use crate::rng::UnitRandom;
use crate::tier::Tier;

/// A concrete reward: a display name and a display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardItem {
    /// Display name.
    pub name: &'static str,
    /// Display glyph (emoji).
    pub glyph: &'static str,
}

impl std::fmt::Display for RewardItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.name)
    }
}

/// Common-tier pool.
pub const COMMON_POOL: &[RewardItem] = &[
    RewardItem { name: "Cornflakes", glyph: "🌽" },
    RewardItem { name: "Milk", glyph: "🥛" },
    RewardItem { name: "Strawberry", glyph: "🍓" },
    RewardItem { name: "Banana", glyph: "🍌" },
    RewardItem { name: "Honey", glyph: "🍯" },
];

/// Rare-tier pool.
pub const RARE_POOL: &[RewardItem] = &[
    RewardItem { name: "Protein Cereal", glyph: "🥣" },
    RewardItem { name: "Choco Granola", glyph: "🍫" },
    RewardItem { name: "Nut Mix", glyph: "🥜" },
];

/// Super-Rare-tier pool.
pub const SUPER_RARE_POOL: &[RewardItem] = &[
    RewardItem { name: "Sparkling Limited Cereal", glyph: "✨🥣" },
    RewardItem { name: "Legendary Choco Bowl", glyph: "👑🍫" },
];

/// The fixed payout of a pity-triggered win. Never appears in a pool.
pub const PITY_JACKPOT: RewardItem = RewardItem {
    name: "Guaranteed Ticket",
    glyph: "🎟️",
};

/// The fixed item every losing roll carries. Never appears in a pool.
pub const CONSOLATION: RewardItem = RewardItem {
    name: "Empty Bowl",
    glyph: "🥣",
};

/// The pool a win at the given tier draws from.
pub fn pool(tier: Tier) -> &'static [RewardItem] {
    match tier {
        Tier::Common => COMMON_POOL,
        Tier::Rare => RARE_POOL,
        Tier::SuperRare => SUPER_RARE_POOL,
    }
}

/// Pick one item uniformly at random from a non-empty pool.
///
/// The index is capped at the last entry so a source that misbehaves and
/// returns 1.0 cannot read past the end.
pub fn pick<R: UnitRandom + ?Sized>(items: &'static [RewardItem], rng: &mut R) -> RewardItem {
    let scaled = rng.next_unit() * items.len() as f64;
    items[(scaled as usize).min(items.len() - 1)]
}
