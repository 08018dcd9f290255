//! One-Ply Greedy Go Engine
//!
//! The policy behind difficulty tiers 3-4: every legal move is scored one
//! ply deep with the shared evaluator and the list is sorted best-first.
//! With probability `randomness` the engine picks uniformly among the top
//! three instead of the outright best, which keeps weaker tiers beatable
//! without making them aimless.

use go_core::{rank_moves, BoardState, Engine, SearchLimits, SearchResult, StoneColor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// How many top-ranked moves the randomness gate chooses among.
const TOP_POOL: usize = 3;

#[derive(Debug, Clone)]
pub struct GreedyEngine {
    randomness: f64,
    rng: StdRng,
    nodes: u64,
}

impl GreedyEngine {
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

impl Engine for GreedyEngine {
    fn search(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        limits: SearchLimits,
    ) -> SearchResult {
        let ranked = rank_moves(board, color);
        self.nodes = ranked.len() as u64;

        if ranked.is_empty() {
            return SearchResult::pass(limits.depth);
        }

        let chosen = if self.rng.gen::<f64>() < self.randomness && ranked.len() > 1 {
            let pool = &ranked[..ranked.len().min(TOP_POOL)];
            pool[self.rng.gen_range(0..pool.len())]
        } else {
            ranked[0]
        };

        SearchResult {
            best_move: Some(chosen.point),
            score: chosen.score,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
