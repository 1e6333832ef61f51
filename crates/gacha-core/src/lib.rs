//! Pity-based gacha outcome engine.
//!
//! One roll is one call to [`roll_once`]: a win/loss draw against a fixed
//! base rate, a reward tier derived from how charged the triggering gesture
//! was, a uniform item pick from that tier's pool, and a pity counter that
//! guarantees a top-tier payout after six consecutive losses. Randomness is
//! injected through [`UnitRandom`] so every decision is reproducible in
//! tests.
//!
//! ```
//! use gacha_core::{RollState, SequenceRandom, roll_once};
//!
//! let mut state = RollState::default();
//! let mut rng = SequenceRandom::new(vec![0.99]);
//!
//! let outcome = roll_once(&mut state, 0.5, &mut rng);
//! assert!(!outcome.is_win());
//! assert_eq!(state.fails(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod item;
pub mod outcome;
pub mod rng;
pub mod session;
pub mod state;
pub mod tier;

pub use config::GachaConfig;
pub use engine::{WIN_RATE, roll_once, roll_once_with_rate};
pub use item::RewardItem;
pub use outcome::Outcome;
pub use rng::{SequenceRandom, UnitRandom};
pub use session::GachaSession;
pub use state::{PITY_LIMIT, RollState};
pub use tier::Tier;
