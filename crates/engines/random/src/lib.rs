//! Random Move Go Engine
//!
//! The policy behind difficulty tiers 1-2: with probability `randomness`
//! it picks uniformly among all legal placements, otherwise it takes the
//! first candidate in scan order. Useful for:
//! - The weakest machine opponents
//! - Baseline comparisons (any real policy should easily beat this)
//! - Stress testing move generation

use go_core::{legal_moves_into, BoardState, Engine, SearchLimits, SearchResult, StoneColor};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};


/// A Go engine that plays randomness-gated legal moves.
///
/// This engine provides no evaluation. Its random source is owned and
/// seedable, so a fixed seed reproduces the same move sequence.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    randomness: f64,
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new(randomness: f64) -> Self {
        Self::with_seed(randomness, rand::random())
    }

    pub fn with_seed(randomness: f64, seed: u64) -> Self {
        Self {
            randomness,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        limits: SearchLimits,
    ) -> SearchResult {
        let mut moves = Vec::new();
        legal_moves_into(board, color, &mut moves);
        self.nodes = moves.len() as u64;

        if moves.is_empty() {
            return SearchResult::pass(limits.depth);
        }

        let best_move = if self.rng.gen::<f64>() < self.randomness {
            moves.choose(&mut self.rng).copied()
        } else {
            Some(moves[0])
        };

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
