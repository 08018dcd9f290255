//! The outward-facing AI service: resolves a difficulty level to a search
//! policy, runs it, and wraps the outcome in the shapes the session layer
//! consumes (autoplay moves and teaching suggestions).
//!
//! Think-time pacing is computed here but never applied: the session layer
//! decides whether to delay, and correctness must not depend on it.

mod explain;

use go_core::{
    top_moves, BoardState, DifficultyProfile, Engine, Point, SearchLimits, SearchPolicy,
    SearchResult, StoneColor,
};
use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_engine::RandomEngine;
use std::time::Duration;
use tracing::{debug, warn};


/// How many ranked alternatives a suggestion carries besides the main move.
const ALTERNATIVE_COUNT: usize = 2;

/// An autoplay move for the machine opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct AiMove {
    pub position: Option<Point>,
    pub is_pass: bool,
    /// Present only when the caller asked for teaching output.
    pub explanation: Option<String>,
}

/// A teaching suggestion for the human player.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSuggestion {
    pub suggested_move: Option<Point>,
    /// Up to two next-best placements, ranked one ply deep.
    pub alternatives: Vec<Point>,
    pub explanation: String,
    pub reasoning: String,
}

/// Owns the policy engines and the random source that seeds them. A seeded
/// advisor replays identically; `new()` seeds from entropy.
#[derive(Debug)]
pub struct GoAdvisor {
    rng: StdRng,
}

impl GoAdvisor {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a move for `color` at the given difficulty. An empty candidate
    /// set comes back as a pass, never an error. Teaching text is produced
    /// only when `learning` is set.
    pub fn generate_move(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        difficulty: u8,
        learning: bool,
    ) -> AiMove {
        let profile = resolve_profile(difficulty);
        let result = self.run_policy(board, color, profile, profile.randomness);

        match result.best_move {
            None => AiMove {
                position: None,
                is_pass: true,
                explanation: learning.then(|| explain::pass_explanation().to_string()),
            },
            Some(point) => {
                debug!(
                    level = profile.level,
                    x = point.x,
                    y = point.y,
                    score = result.score,
                    nodes = result.nodes,
                    "generated move"
                );
                AiMove {
                    position: Some(point),
                    is_pass: false,
                    explanation: learning.then(|| explain::move_explanation(board, point, color)),
                }
            }
        }
    }

    /// Suggest the strongest move for `color` plus ranked alternatives.
    /// Randomness is suppressed so the advice is stable for a position.
    pub fn suggest_move(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        difficulty: u8,
    ) -> MoveSuggestion {
        let profile = resolve_profile(difficulty);
        let result = self.run_policy(board, color, profile, 0.0);
        let suggested = result.best_move;

        let alternatives: Vec<Point> = top_moves(board, color, ALTERNATIVE_COUNT + 1)
            .into_iter()
            .map(|m| m.point)
            .filter(|p| Some(*p) != suggested)
            .take(ALTERNATIVE_COUNT)
            .collect();

        match suggested {
            None => MoveSuggestion {
                suggested_move: None,
                alternatives,
                explanation: explain::pass_explanation().to_string(),
                reasoning: explain::pass_reasoning().to_string(),
            },
            Some(point) => MoveSuggestion {
                suggested_move: Some(point),
                alternatives,
                explanation: explain::move_explanation(board, point, color),
                reasoning: explain::move_reasoning(board, point, color),
            },
        }
    }

    /// Sampled pacing delay for the difficulty. Purely cosmetic.
    pub fn think_time(&mut self, difficulty: u8) -> Duration {
        resolve_profile(difficulty).think_time(&mut self.rng)
    }

    fn run_policy(
        &mut self,
        board: &BoardState,
        color: StoneColor,
        profile: &DifficultyProfile,
        randomness: f64,
    ) -> SearchResult {
        let limits = SearchLimits::depth(profile.depth);
        let seed = self.rng.gen::<u64>();
        match profile.policy() {
            SearchPolicy::Random => {
                let mut engine = RandomEngine::with_seed(randomness, seed);
                engine.search(board, color, limits)
            }
            SearchPolicy::Greedy => {
                let mut engine = GreedyEngine::with_seed(randomness, seed);
                engine.search(board, color, limits)
            }
            SearchPolicy::Minimax => {
                let mut engine = MinimaxEngine::with_seed(randomness, seed);
                engine.search(board, color, limits)
            }
        }
    }
}

impl Default for GoAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_profile(difficulty: u8) -> &'static DifficultyProfile {
    if !(1..=10).contains(&difficulty) {
        warn!(difficulty, "unrecognized difficulty, using the default");
    }
    DifficultyProfile::for_level(difficulty)
}
