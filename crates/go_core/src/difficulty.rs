//! The static difficulty table driving the machine opponent.

use rand::Rng;
use std::time::Duration;

/// Level used when a request carries an unrecognized difficulty.
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Which selection policy a difficulty level runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Tiers 1-2: randomness-gated uniform choice.
    Random,
    /// Tiers 3-4: one-ply greedy over the evaluator.
    Greedy,
    /// Tiers 5-10: depth-limited minimax with alpha-beta pruning.
    Minimax,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub level: u8,
    /// Search depth in plies (used by the minimax tiers).
    pub depth: u8,
    /// Probability of deviating from the deterministic best choice.
    pub randomness: f64,
    /// Nominal think time; the sampled pacing value lands in [t/2, t].
    pub think_time_ms: u64,
}

pub const DIFFICULTY_PROFILES: [DifficultyProfile; 10] = [
    DifficultyProfile { level: 1, depth: 1, randomness: 0.8, think_time_ms: 500 },
    DifficultyProfile { level: 2, depth: 1, randomness: 0.6, think_time_ms: 800 },
    DifficultyProfile { level: 3, depth: 2, randomness: 0.4, think_time_ms: 1200 },
    DifficultyProfile { level: 4, depth: 2, randomness: 0.3, think_time_ms: 1500 },
    DifficultyProfile { level: 5, depth: 3, randomness: 0.2, think_time_ms: 2000 },
    DifficultyProfile { level: 6, depth: 3, randomness: 0.15, think_time_ms: 2500 },
    DifficultyProfile { level: 7, depth: 4, randomness: 0.1, think_time_ms: 3000 },
    DifficultyProfile { level: 8, depth: 4, randomness: 0.05, think_time_ms: 3500 },
    DifficultyProfile { level: 9, depth: 5, randomness: 0.02, think_time_ms: 4000 },
    DifficultyProfile { level: 10, depth: 5, randomness: 0.0, think_time_ms: 5000 },
];

impl DifficultyProfile {
    /// Profile for `level`, falling back to level 5 outside 1..=10.
    pub fn for_level(level: u8) -> &'static DifficultyProfile {
        let level = if (1..=10).contains(&level) {
            level
        } else {
            DEFAULT_DIFFICULTY
        };
        &DIFFICULTY_PROFILES[(level - 1) as usize]
    }

    pub fn policy(&self) -> SearchPolicy {
        match self.level {
            1..=2 => SearchPolicy::Random,
            3..=4 => SearchPolicy::Greedy,
            _ => SearchPolicy::Minimax,
        }
    }

    /// Sample a pacing delay from [t/2, t]. Purely cosmetic: nothing in the
    /// engine waits on it, the session layer applies it if it wants to.
    pub fn think_time<R: Rng>(&self, rng: &mut R) -> Duration {
        let nominal = self.think_time_ms as f64;
        let ms = rng.gen::<f64>() * nominal * 0.5 + nominal * 0.5;
        Duration::from_millis(ms as u64)
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
