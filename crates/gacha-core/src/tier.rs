//! Reward tiers and the charge-to-tier mapping.
//!
//! A winning roll's tier is decided entirely by how charged the triggering
//! gesture was: a normalized value in `[0, 1]` is compared against two
//! fixed thresholds. Boundary values belong to the lower tier.

use serde::{Deserialize, Serialize};

/// Charge above which a win is Super Rare.
const SUPER_RARE_ABOVE: f64 = 0.92;

/// Charge above which a win is at least Rare.
const RARE_ABOVE: f64 = 0.66;

/// Reward rarity, ordered from least to most valuable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Baseline rewards (label "N").
    Common,
    /// Mid-tier rewards (label "R").
    Rare,
    /// Top-tier rewards (label "SR"). Also the forced tier of pity payouts.
    SuperRare,
}

impl Tier {
    /// All tiers in ascending rarity order.
    pub fn all() -> &'static [Self] {
        &[Self::Common, Self::Rare, Self::SuperRare]
    }

    /// Short rarity label: "N", "R", or "SR".
    pub fn label(self) -> &'static str {
        match self {
            Self::Common => "N",
            Self::Rare => "R",
            Self::SuperRare => "SR",
        }
    }

    /// Map a charge level to the tier a win at that charge yields.
    ///
    /// The charge is clamped to `[0, 1]` first, so callers may pass raw,
    /// un-normalized input. Strictly above 0.92 is Super Rare, strictly
    /// above 0.66 is Rare, everything else is Common.
    pub fn from_charge(charge: f64) -> Self {
        let c = charge.clamp(0.0, 1.0);
        if c > SUPER_RARE_ABOVE {
            Self::SuperRare
        } else if c > RARE_ABOVE {
            Self::Rare
        } else {
            Self::Common
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Rare => write!(f, "Rare"),
            Self::SuperRare => write!(f, "Super Rare"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_thresholds() {
        assert_eq!(Tier::from_charge(0.0), Tier::Common);
        assert_eq!(Tier::from_charge(0.7), Tier::Rare);
        assert_eq!(Tier::from_charge(0.95), Tier::SuperRare);
    }

    #[test]
    fn boundaries_stay_in_lower_tier() {
        assert_eq!(Tier::from_charge(0.66), Tier::Common);
        assert_eq!(Tier::from_charge(0.92), Tier::Rare);
    }

    #[test]
    fn just_above_boundary_promotes() {
        assert_eq!(Tier::from_charge(0.6601), Tier::Rare);
        assert_eq!(Tier::from_charge(0.9201), Tier::SuperRare);
    }

    #[test]
    fn out_of_range_charge_is_clamped() {
        assert_eq!(Tier::from_charge(-3.0), Tier::Common);
        assert_eq!(Tier::from_charge(2.0), Tier::SuperRare);
    }

    #[test]
    fn ordered_by_rarity() {
        assert!(Tier::Common < Tier::Rare);
        assert!(Tier::Rare < Tier::SuperRare);
    }

    #[test]
    fn labels() {
        assert_eq!(Tier::Common.label(), "N");
        assert_eq!(Tier::Rare.label(), "R");
        assert_eq!(Tier::SuperRare.label(), "SR");
    }

    #[test]
    fn display() {
        assert_eq!(Tier::Common.to_string(), "Common");
        assert_eq!(Tier::SuperRare.to_string(), "Super Rare");
    }
}
