//! Dice.
//!
//! The turn engine never rolls. Rolls come from a [`RollSource`], which is
//! either the seeded [`GameRng`] or a scripted [`FixedRolls`] sequence.
//!
//! ```
//! use snakes_ladders::core::{GameRng, RollSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same dice
//! for _ in 0..20 {
//!     assert_eq!(a.roll(), b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Faces on the die.
pub const DIE_FACES: u8 = 6;

/// Anything that can produce die rolls.
///
/// Implementations should return values in `1..=6`. The engine rejects
/// anything else as a broken source.
pub trait RollSource {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

/// Deterministic RNG for dice.
///
/// Uses ChaCha8 so that a seed replays the same game on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Used to keep cosmetic randomness (dice-face flicker) from consuming
    /// the rolls that decide the game.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }
}

impl RollSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.gen_range(1..=DIE_FACES)
    }
}

/// Scripted rolls, repeated in order once exhausted.
///
/// ```
/// use snakes_ladders::core::{FixedRolls, RollSource};
///
/// let mut dice = FixedRolls::new([3, 6]);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FixedRolls {
    rolls: Vec<u8>,
    cursor: usize,
}

impl FixedRolls {
    /// Create a scripted source. Panics if `rolls` is empty.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "FixedRolls needs at least one roll");
        Self { rolls, cursor: 0 }
    }
}

impl RollSource for FixedRolls {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.cursor];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        value
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_cover_all_faces() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; DIE_FACES as usize];

        for _ in 0..600 {
            let value = rng.roll();
            assert!((1..=DIE_FACES).contains(&value));
            seen[(value - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_context_is_independent() {
        let rng = GameRng::new(42);
        let mut dice = rng.clone();
        let mut flicker = rng.for_context("flicker");

        let seq1: Vec<_> = (0..20).map(|_| dice.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| flicker.roll()).collect();
        assert_ne!(seq1, seq2);

        let mut again = GameRng::new(42).for_context("flicker");
        let seq3: Vec<_> = (0..20).map(|_| again.roll()).collect();
        assert_eq!(seq2, seq3);
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut dice = FixedRolls::new(vec![1, 2, 3]);
        let seq: Vec<_> = (0..7).map(|_| dice.roll()).collect();
        assert_eq!(seq, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    #[should_panic(expected = "at least one roll")]
    fn test_fixed_rolls_empty() {
        let _ = FixedRolls::new(Vec::new());
    }
}
