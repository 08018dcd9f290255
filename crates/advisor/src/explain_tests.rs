use super::*;
use go_core::StoneColor::{Black, White};

#[test]
fn capture_is_called_out() {
    let mut board = BoardState::new(9).unwrap();
    place_stone(&mut board, Point::new(0, 0), White).unwrap();
    place_stone(&mut board, Point::new(1, 0), Black).unwrap();

    let text = move_explanation(&board, Point::new(0, 1), Black);
    assert!(text.contains("captures an opposing stone"));

    let reasoning = move_reasoning(&board, Point::new(0, 1), Black);
    assert!(reasoning.contains("Capturing"));
}

#[test]
fn corner_and_center_are_mentioned() {
    let board = BoardState::new(9).unwrap();

    let corner = move_explanation(&board, Point::new(1, 1), Black);
    assert!(corner.contains("corner"));

    let center = move_explanation(&board, Point::new(4, 4), Black);
    assert!(center.contains("center"));
}

#[test]
fn quiet_move_gets_fallback_text() {
    let board = BoardState::new(19).unwrap();
    // Far from corners and center on a 19x19 board.
    let text = move_explanation(&board, Point::new(9, 3), Black);
    assert_eq!(text, "A solid move in this position.");
}

#[test]
fn safe_stone_reasoning_mentions_liberties() {
    let board = BoardState::new(9).unwrap();
    let reasoning = move_reasoning(&board, Point::new(4, 4), Black);
    assert!(reasoning.contains("liberties"));
}
