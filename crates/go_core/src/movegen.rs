use crate::board::BoardState;
use crate::rules::place_stone;
use crate::types::{Point, StoneColor};

/// Generate all legal placements for `color`, returning a fresh vector.
pub fn legal_moves(board: &BoardState, color: StoneColor) -> Vec<Point> {
    let mut out = Vec::new();
    legal_moves_into(board, color, &mut out);
    out
}

/// Generate all legal placements into the provided buffer, reusing it across
/// calls. Every empty intersection is probed against a scratch copy, so the
/// caller's board is never touched.
pub fn legal_moves_into(board: &BoardState, color: StoneColor, out: &mut Vec<Point>) {
    out.clear();
    for p in board.all_points() {
        if board.stone_at(p).is_some() {
            continue;
        }
        let mut probe = board.clone();
        if place_stone(&mut probe, p, color).is_ok() {
            out.push(p);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
