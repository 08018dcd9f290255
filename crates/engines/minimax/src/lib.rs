//! Minimax Go Engine
//!
//! The policy behind difficulty tiers 5-10: depth-limited minimax with
//! alpha-beta pruning over the shared evaluator. Branching is bounded by
//! ranking candidates one ply deep and keeping only the best ten below the
//! root. With probability `randomness` the engine picks uniformly between
//! the two best root moves instead of the outright best.
//!
//! Search honors the node and wall-clock ceilings in `SearchLimits`: when a
//! ceiling trips, the best fully-scored root move so far is returned and the
//! result is flagged `stopped`.

mod search;

use go_core::{BoardState, Engine, SearchLimits, SearchResult, StoneColor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// How many top root moves the randomness gate chooses among.
const ROOT_POOL: usize = 2;

#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    randomness: f64,
    rng: StdRng,
    nodes: u64,
}

impl MinimaxEngine {
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

impl Engine for MinimaxEngine {
    fn search(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        limits: SearchLimits,
    ) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = search::score_root_moves(board, color, &limits, &mut self.nodes);
        if outcome.moves.is_empty() {
            return SearchResult::pass(limits.depth);
        }

        let chosen = if self.rng.gen::<f64>() < self.randomness && outcome.moves.len() > 1 {
            let pool = &outcome.moves[..outcome.moves.len().min(ROOT_POOL)];
            pool[self.rng.gen_range(0..pool.len())]
        } else {
            outcome.moves[0]
        };

        SearchResult {
            best_move: Some(chosen.point),
            score: chosen.score,
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
