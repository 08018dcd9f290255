//! Heuristic position and move evaluation.
//!
//! All position scores are from Black's perspective; callers flip the sign
//! via `StoneColor::sign` to get the mover's view. Move scores are already
//! from the mover's perspective.

use crate::analysis::{count_liberties, find_group, find_territories};
use crate::board::BoardState;
use crate::movegen::legal_moves;
use crate::rules::place_stone;
use crate::types::{Point, StoneColor};

/// Score assigned to a placement that fails legality probing.
pub const ILLEGAL_MOVE_SCORE: f64 = -1000.0;

const CAPTURE_WEIGHT: f64 = 10.0;
const TERRITORY_WEIGHT: f64 = 0.5;

// Placement bonuses applied in `evaluate_move`.
const CORNER_PLACEMENT_BONUS: f64 = 5.0;
const EDGE_PLACEMENT_BONUS: f64 = 2.0;
const CENTER_PLACEMENT_BONUS: f64 = 3.0;

// Board occupancy fractions that bound each game phase.
const OPENING_OCCUPANCY: f64 = 0.2;
const MIDDLE_GAME_OCCUPANCY: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    MiddleGame,
    Endgame,
}

pub fn game_phase(board: &BoardState) -> GamePhase {
    let total = (board.size() * board.size()) as f64;
    let occupancy = board.stones().count() as f64 / total;
    if occupancy < OPENING_OCCUPANCY {
        GamePhase::Opening
    } else if occupancy < MIDDLE_GAME_OCCUPANCY {
        GamePhase::MiddleGame
    } else {
        GamePhase::Endgame
    }
}

/// Static evaluation from Black's perspective: material, group safety,
/// position, a phase-dependent strategic term, and estimated territory.
pub fn evaluate_position(board: &BoardState) -> f64 {
    let phase = game_phase(board);
    let mut score = 0.0;

    for (p, color) in board.stones() {
        let stone_score =
            1.0 + stone_influence(board, p) + phase_bonus(board, p, color, phase);
        score += color.sign() * stone_score;
    }

    score + territory_score(board)
}

/// Same evaluation seen from `color`'s side.
pub fn evaluate_position_for(board: &BoardState, color: StoneColor) -> f64 {
    color.sign() * evaluate_position(board)
}

/// One-ply score of placing at `point`, from the mover's perspective:
/// captures, the resulting position, and where on the board the stone lands.
pub fn evaluate_move(board: &BoardState, point: Point, color: StoneColor) -> f64 {
    let mut probe = board.clone();
    let placement = match place_stone(&mut probe, point, color) {
        Ok(placement) => placement,
        Err(_) => return ILLEGAL_MOVE_SCORE,
    };

    let mut score = CAPTURE_WEIGHT * f64::from(placement.captured);
    score += evaluate_position_for(&probe, color);

    let size = board.size();
    if in_corner_region(point, size) {
        score += CORNER_PLACEMENT_BONUS;
    }
    if on_edge(point, size) {
        score += EDGE_PLACEMENT_BONUS;
    }
    if in_center_region(point, size) {
        score += CENTER_PLACEMENT_BONUS;
    }

    score
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub point: Point,
    pub score: f64,
}

/// Every legal move for `color`, ranked by one-ply score, best first.
/// Ties keep scan order, so ranking is deterministic.
pub fn rank_moves(board: &BoardState, color: StoneColor) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = legal_moves(board, color)
        .into_iter()
        .map(|p| ScoredMove {
            point: p,
            score: evaluate_move(board, p, color),
        })
        .collect();
    sort_moves_by_score(&mut scored);
    scored
}

/// The `limit` best-ranked moves for `color`.
pub fn top_moves(board: &BoardState, color: StoneColor, limit: usize) -> Vec<ScoredMove> {
    let mut scored = rank_moves(board, color);
    scored.truncate(limit);
    scored
}

/// Sort scored moves best-first; ties keep their existing order.
pub fn sort_moves_by_score(moves: &mut [ScoredMove]) {
    moves.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Group safety plus static positional value of one stone.
fn stone_influence(board: &BoardState, p: Point) -> f64 {
    let group = find_group(board, p);
    let liberties = count_liberties(board, &group);

    let mut influence = 0.0;
    if liberties >= 3 {
        influence += 2.0;
    } else if liberties == 2 {
        influence += 1.0;
    } else if liberties == 1 {
        influence -= 5.0;
    }

    let size = board.size();
    if in_corner_region(p, size) {
        influence += 3.0;
    }
    if on_edge(p, size) {
        influence += 1.0;
    }

    influence
}

fn phase_bonus(board: &BoardState, p: Point, color: StoneColor, phase: GamePhase) -> f64 {
    let size = board.size();
    match phase {
        GamePhase::Opening => {
            let mut bonus = 0.0;
            if is_star_point(p, size) {
                bonus += 3.0;
            }
            if in_corner_region(p, size) {
                bonus += 2.0;
            }
            bonus
        }
        GamePhase::MiddleGame => {
            let mut bonus = 0.0;
            let friendly = board
                .neighbors(p)
                .iter()
                .filter(|&&n| board.stone_at(n) == Some(color))
                .count();
            if friendly >= 2 {
                bonus += 2.0;
            }
            if touches_weak_enemy(board, p, color) {
                bonus += 2.0;
            }
            bonus
        }
        GamePhase::Endgame => {
            if touches_dame(board, p) {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// True when an adjacent enemy group is down to two liberties or fewer,
/// i.e. the stone is cutting or attacking.
fn touches_weak_enemy(board: &BoardState, p: Point, color: StoneColor) -> bool {
    for n in board.neighbors(p) {
        if board.stone_at(n) == Some(color.opponent()) {
            let group = find_group(board, n);
            if count_liberties(board, &group) <= 2 {
                return true;
            }
        }
    }
    false
}

fn touches_dame(board: &BoardState, p: Point) -> bool {
    board
        .neighbors(p)
        .into_iter()
        .any(|n| board.stone_at(n).is_none() && is_dame(board, n))
}

/// An empty point bordered by both colors.
fn is_dame(board: &BoardState, p: Point) -> bool {
    let mut black = false;
    let mut white = false;
    for n in board.neighbors(p) {
        match board.stone_at(n) {
            Some(StoneColor::Black) => black = true,
            Some(StoneColor::White) => white = true,
            None => {}
        }
    }
    black && white
}

fn territory_score(board: &BoardState) -> f64 {
    let mut score = 0.0;
    for territory in find_territories(board) {
        if let Some(owner) = territory.owner {
            score += owner.sign() * TERRITORY_WEIGHT * territory.size() as f64;
        }
    }
    score
}

/// Within two intersections of a corner, on both axes.
pub fn in_corner_region(p: Point, size: usize) -> bool {
    let near = |v: usize| v <= 2 || v + 3 >= size;
    near(p.x) && near(p.y)
}

pub fn on_edge(p: Point, size: usize) -> bool {
    p.x == 0 || p.y == 0 || p.x + 1 == size || p.y + 1 == size
}

/// Within two intersections of the board center, on both axes.
pub fn in_center_region(p: Point, size: usize) -> bool {
    let center = size / 2;
    p.x.abs_diff(center) <= 2 && p.y.abs_diff(center) <= 2
}

/// Conventional star points (hoshi) for the supported sizes.
pub fn star_points(size: usize) -> Vec<Point> {
    let offset = if size < 13 { 2 } else { 3 };
    let lo = offset;
    let hi = size - 1 - offset;
    let center = size / 2;

    if size >= 19 {
        // Full nine-point grid.
        let lines = [lo, center, hi];
        let mut points = Vec::with_capacity(9);
        for &x in &lines {
            for &y in &lines {
                points.push(Point::new(x, y));
            }
        }
        points
    } else {
        vec![
            Point::new(lo, lo),
            Point::new(lo, hi),
            Point::new(hi, lo),
            Point::new(hi, hi),
            Point::new(center, center),
        ]
    }
}

pub fn is_star_point(p: Point, size: usize) -> bool {
    star_points(size).contains(&p)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
