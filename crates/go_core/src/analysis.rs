//! Flood-fill connectivity queries: groups, liberties, and territories.
//!
//! Everything here is recomputed per call. At the supported board sizes a
//! full scan is cheap enough that caching would only add invalidation
//! hazards on placement.

use crate::board::BoardState;
use crate::types::{Point, StoneColor};
use std::collections::HashSet;

/// The maximal same-colored group connected to `start`, or empty if the
/// point is empty or off the board.
pub fn find_group(board: &BoardState, start: Point) -> Vec<Point> {
    let color = match board.stone_at(start) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut group = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        if !visited.insert(p) {
            continue;
        }
        if board.stone_at(p) == Some(color) {
            group.push(p);
            for n in board.neighbors(p) {
                if !visited.contains(&n) {
                    stack.push(n);
                }
            }
        }
    }

    group
}

/// Distinct empty points orthogonally adjacent to the group.
pub fn count_liberties(board: &BoardState, group: &[Point]) -> usize {
    let mut liberties = HashSet::new();
    for &p in group {
        for n in board.neighbors(p) {
            if board.stone_at(n).is_none() {
                liberties.insert(n);
            }
        }
    }
    liberties.len()
}

/// All zero-liberty groups of `color`, deduplicated by a whole-board scan.
pub fn find_captured_groups(board: &BoardState, color: StoneColor) -> Vec<Vec<Point>> {
    let mut captured = Vec::new();
    let mut visited: HashSet<Point> = HashSet::new();

    for p in board.all_points() {
        if board.stone_at(p) == Some(color) && !visited.contains(&p) {
            let group = find_group(board, p);
            visited.extend(group.iter().copied());
            if count_liberties(board, &group) == 0 {
                captured.push(group);
            }
        }
    }

    captured
}

/// A maximal empty region. `owner` is the single bordering color, or `None`
/// when the region touches both colors or no stones at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Territory {
    pub points: Vec<Point>,
    pub owner: Option<StoneColor>,
}

impl Territory {
    pub fn size(&self) -> usize {
        self.points.len()
    }
}

pub fn find_territories(board: &BoardState) -> Vec<Territory> {
    let mut territories = Vec::new();
    let mut claimed: HashSet<Point> = HashSet::new();

    for p in board.all_points() {
        if board.stone_at(p).is_none() && !claimed.contains(&p) {
            territories.push(flood_territory(board, p, &mut claimed));
        }
    }

    territories
}

fn flood_territory(board: &BoardState, start: Point, claimed: &mut HashSet<Point>) -> Territory {
    let mut points = Vec::new();
    let mut borders: HashSet<StoneColor> = HashSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        if !seen.insert(p) {
            continue;
        }
        match board.stone_at(p) {
            None => {
                points.push(p);
                claimed.insert(p);
                for n in board.neighbors(p) {
                    if !seen.contains(&n) {
                        stack.push(n);
                    }
                }
            }
            // Border stones stay out of `claimed` so a stone separating two
            // regions is counted as a border of both.
            Some(c) => {
                borders.insert(c);
            }
        }
    }

    let owner = if borders.len() == 1 {
        borders.into_iter().next()
    } else {
        None
    };

    Territory { points, owner }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
