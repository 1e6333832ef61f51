//! The per-roll result.
//!
//! A tagged union rather than one struct with optional fields: a loss
//! cannot carry a tier, and only a win can be a pity payout.

use serde::Serialize;

use crate::item::RewardItem;
use crate::tier::Tier;

/// What a single roll produced. Returned to the caller, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The roll won a reward.
    Win {
        /// Reward tier. Forced to [`Tier::SuperRare`] on pity payouts.
        tier: Tier,
        /// True when the pity counter fired instead of the random draw.
        pity: bool,
        /// The granted item.
        item: RewardItem,
        /// Optional banner text for the renderer.
        header: Option<&'static str>,
    },
    /// The roll lost.
    Loss {
        /// The fixed consolation item.
        item: RewardItem,
        /// Optional banner text for the renderer.
        header: Option<&'static str>,
    },
}

impl Outcome {
    /// True for any win, pity or not.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }

    /// True only for a pity-triggered win.
    pub fn is_pity(&self) -> bool {
        matches!(self, Self::Win { pity: true, .. })
    }

    /// The granted item (every outcome carries one).
    pub fn item(&self) -> RewardItem {
        match self {
            Self::Win { item, .. } | Self::Loss { item, .. } => *item,
        }
    }

    /// The reward tier, if this outcome is a win.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Self::Win { tier, .. } => Some(*tier),
            Self::Loss { .. } => None,
        }
    }

    /// Banner text for the renderer, if any.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Self::Win { header, .. } | Self::Loss { header, .. } => *header,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win {
                tier,
                pity: true,
                item,
                ..
            } => write!(f, "guaranteed win [{tier}]: {item}"),
            Self::Win { tier, item, .. } => write!(f, "win [{tier}]: {item}"),
            Self::Loss { item, .. } => write!(f, "miss: {item}"),
        }
    }
}
