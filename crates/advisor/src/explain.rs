//! Natural-language texts derived from a move's attributes: captures,
//! board region, and the safety of the placed stone.

use go_core::{
    count_liberties, find_group, in_center_region, in_corner_region, place_stone, BoardState,
    Point, StoneColor,
};

pub(crate) fn pass_explanation() -> &'static str {
    "No good placement is available; passing is best."
}

pub(crate) fn pass_reasoning() -> &'static str {
    "There is no promising point in the current position, so waiting for the opponent's move is the strongest option."
}

/// Short teaching text for a placement.
pub(crate) fn move_explanation(board: &BoardState, point: Point, color: StoneColor) -> String {
    let mut parts = Vec::new();
    let size = board.size();

    if in_corner_region(point, size) {
        parts.push("Taking a corner is fundamental opening strategy.".to_string());
    }

    let mut probe = board.clone();
    if let Ok(placement) = place_stone(&mut probe, point, color) {
        if placement.captured == 1 {
            parts.push("This move captures an opposing stone.".to_string());
        } else if placement.captured > 1 {
            parts.push(format!(
                "This move captures {} opposing stones.",
                placement.captured
            ));
        }
    }

    if in_center_region(point, size) {
        parts.push("Controlling the center helps the whole-board position.".to_string());
    }

    if parts.is_empty() {
        "A solid move in this position.".to_string()
    } else {
        parts.join(" ")
    }
}

/// Longer rationale for a placement, based on the resulting position.
pub(crate) fn move_reasoning(board: &BoardState, point: Point, color: StoneColor) -> String {
    let mut reasons = Vec::new();

    if in_corner_region(point, board.size()) {
        reasons.push("Corner positions are the easiest to secure and matter most early on.");
    }

    let mut probe = board.clone();
    if let Ok(placement) = place_stone(&mut probe, point, color) {
        if placement.captured > 0 {
            reasons.push("Capturing stones converts pressure into concrete profit.");
        }

        let group = find_group(&probe, point);
        if count_liberties(&probe, &group) >= 3 {
            reasons.push("The stone is safe here, with plenty of liberties.");
        }
    }

    if reasons.is_empty() {
        "This is the strongest choice in the current position.".to_string()
    } else {
        reasons.join(" ")
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod explain_tests;
