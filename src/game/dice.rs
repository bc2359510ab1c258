//! Dice: the only source of randomness in a match.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Lowest face of the die.
pub const MIN_ROLL: u8 = 1;

/// Highest face of the die; rolling it grants a bonus action.
pub const MAX_ROLL: u8 = 6;

/// A six-sided die.
pub trait Die {
    /// Roll once, returning a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Seeded pseudo-random die. The same seed always yields the same rolls.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: SmallRng,
}

impl SeededDice {
    /// Create a die from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Die for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(MIN_ROLL..=MAX_ROLL)
    }
}

/// A die that replays a fixed script of rolls, for hand-built scenarios.
///
/// The script must cover every roll the scenario makes, including the
/// opening tie-break.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
}

impl ScriptedDice {
    /// Replay `rolls` in order.
    ///
    /// # Panics
    ///
    /// Panics if a scripted value is not a die face.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let script: VecDeque<u8> = rolls.into_iter().collect();
        assert!(
            script.iter().all(|r| (MIN_ROLL..=MAX_ROLL).contains(r)),
            "scripted rolls must be between {MIN_ROLL} and {MAX_ROLL}: {script:?}"
        );
        Self { script }
    }
}

impl Die for ScriptedDice {
    /// Next scripted roll.
    ///
    /// # Panics
    ///
    /// Panics once the script is exhausted.
    fn roll(&mut self) -> u8 {
        self.script
            .pop_front()
            .unwrap_or_else(|| panic!("dice script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rolls_in_range() {
        let mut dice = SeededDice::new(7);
        for _ in 0..1000 {
            let roll = dice.roll();
            assert!((MIN_ROLL..=MAX_ROLL).contains(&roll));
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = SeededDice::new(12345);
        let mut b = SeededDice::new(12345);
        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_seeded_covers_all_faces() {
        let mut dice = SeededDice::new(99);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[usize::from(dice.roll() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut dice = ScriptedDice::new([6, 3, 5]);
        assert_eq!(dice.roll(), 6);
        assert_eq!(dice.roll(), 3);
        assert_eq!(dice.roll(), 5);
    }

    #[test]
    #[should_panic(expected = "dice script exhausted")]
    fn test_scripted_exhausted_panics() {
        let mut dice = ScriptedDice::new([2]);
        dice.roll();
        dice.roll();
    }

    #[test]
    #[should_panic(expected = "dice script exhausted")]
    fn test_empty_script_panics() {
        let mut dice = ScriptedDice::new([]);
        dice.roll();
    }

    #[test]
    #[should_panic(expected = "scripted rolls")]
    fn test_scripted_rejects_bad_face() {
        let _ = ScriptedDice::new([7]);
    }
}
