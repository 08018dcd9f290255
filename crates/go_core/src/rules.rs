//! Placement legality and its side effects: captures, suicide, ko.

use crate::analysis::{count_liberties, find_captured_groups, find_group};
use crate::board::BoardState;
use crate::types::{PlaceError, Placement, Point, StoneColor};

/// Attempt to place a stone for `color` at `point`.
///
/// On success the stone is on the board, all resulting captures are removed
/// and credited to the mover, a history record is appended, and the ko point
/// is recomputed. On any error the board is left exactly as it was.
pub fn place_stone(
    board: &mut BoardState,
    point: Point,
    color: StoneColor,
) -> Result<Placement, PlaceError> {
    if !board.is_on_board(point.x, point.y) {
        return Err(PlaceError::OutOfBounds);
    }
    if board.stone_at(point).is_some() {
        return Err(PlaceError::Occupied);
    }

    // Tentative placement; undone on either failure path below.
    board.set_stone(point, Some(color));

    let captured_groups = find_captured_groups(board, color.opponent());

    if captured_groups.is_empty() && count_liberties(board, &find_group(board, point)) == 0 {
        board.set_stone(point, None);
        return Err(PlaceError::Suicide);
    }

    // Checked against the pre-capture board, matching the single-stone
    // recapture shape: the one stone about to be taken sits on the ko point.
    if is_ko_violation(board, &captured_groups) {
        board.set_stone(point, None);
        return Err(PlaceError::KoViolation);
    }

    let mut captured = 0u32;
    for group in &captured_groups {
        for &p in group {
            board.set_stone(p, None);
        }
        captured += group.len() as u32;
    }

    board.add_captured(color, captured);
    board.push_move(point, color, captured);
    let ko = next_ko_position(board, point, &captured_groups);
    board.set_ko(ko);

    Ok(Placement { captured })
}

fn is_ko_violation(board: &BoardState, captured_groups: &[Vec<Point>]) -> bool {
    let ko = match board.ko_position() {
        Some(k) => k,
        None => return false,
    };
    captured_groups.len() == 1 && captured_groups[0].len() == 1 && captured_groups[0][0] == ko
}

/// The ko point after a committed move: set only when exactly one stone was
/// captured and the placed stone now stands alone with a single liberty.
fn next_ko_position(
    board: &BoardState,
    point: Point,
    captured_groups: &[Vec<Point>],
) -> Option<Point> {
    if captured_groups.len() == 1 && captured_groups[0].len() == 1 {
        let group = find_group(board, point);
        if group.len() == 1 && count_liberties(board, &group) == 1 {
            return Some(point);
        }
    }
    None
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
