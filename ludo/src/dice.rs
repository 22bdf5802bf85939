use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the game's dice values come from. This is the only source of
/// randomness in a game.
pub trait DiceSource {
    /// Returns a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Fair dice from a seeded RNG.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Dice that replay a fixed list of values.
///
/// Panics when more values are rolled than were scripted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: VecDeque<u8> = values.into_iter().collect();
        assert!(
            values.iter().all(|v| (1..=6).contains(v)),
            "scripted dice values must be between 1 and 6"
        );
        Self { values }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.values.pop_front().expect("ran out of scripted dice values")
    }
}
