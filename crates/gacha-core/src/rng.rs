//! Randomness injection for the engine.
//!
//! Every decision draws from a [`UnitRandom`], a source of uniform values
//! in the half-open interval `[0, 1)`. Production code hands the engine a
//! seeded [`StdRng`]; tests hand it a [`SequenceRandom`] replaying a fixed
//! sequence, which makes every outcome a pure function of its inputs.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A source of uniform random values in `[0, 1)`.
///
/// The engine calls this at most twice per roll: once for the win/loss
/// decision and, on a win, once more to pick the item. The pity path
/// draws nothing.
pub trait UnitRandom {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl UnitRandom for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

impl UnitRandom for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// A deterministic [`UnitRandom`] that replays a fixed sequence.
///
/// Once the sequence is exhausted it keeps returning the last value, so a
/// single-element sequence acts as a constant source. Calls are counted,
/// which lets tests assert how many draws a code path consumed.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
    calls: u32,
}

impl SequenceRandom {
    /// Create a replay source from a non-empty sequence of values in
    /// `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self {
            values,
            next: 0,
            calls: 0,
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// How many times `next_unit` has been called.
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl UnitRandom for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        self.calls += 1;
        let v = self.values[self.next.min(self.values.len() - 1)];
        self.next += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn std_rng_produces_unit_values() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn sequence_replays_in_order() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.2, 0.3]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.3);
    }

    #[test]
    fn sequence_repeats_last_value_when_exhausted() {
        let mut rng = SequenceRandom::new(vec![0.4, 0.9]);
        rng.next_unit();
        rng.next_unit();
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.9);
    }

    #[test]
    fn sequence_counts_calls() {
        let mut rng = SequenceRandom::constant(0.5);
        assert_eq!(rng.calls(), 0);
        rng.next_unit();
        rng.next_unit();
        assert_eq!(rng.calls(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn empty_sequence_panics() {
        let _ = SequenceRandom::new(Vec::new());
    }
}
