//! Randomness collaborator.
//!
//! The simulation only ever needs "a uniform integer below n", so that is the
//! whole seam.  Tests script the rolls; the binary wraps a `rand` generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Dice {
    /// Uniform value in `[0, sides)`, or `0` when `sides` is zero.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Adapts any `rand::Rng` into `Dice`.
#[derive(Clone, Debug)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<StdRng> {
    /// Reproducible dice for a given seed, or entropy-seeded when `None`.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RngDice { rng }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.gen_range(0..sides)
    }
}
