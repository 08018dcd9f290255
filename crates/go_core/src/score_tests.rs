use super::*;
use crate::rules::place_stone;
use crate::types::{Point, StoneColor};
use crate::types::StoneColor::{Black, White};

fn put(board: &mut BoardState, x: usize, y: usize, color: StoneColor) {
    place_stone(board, Point::new(x, y), color).unwrap();
}

#[test]
fn test_enclosed_region_scores_for_black_only() {
    // A black ring around a 3x3 interior; a lone white stone keeps the
    // outside neutral.
    let mut board = BoardState::new(9).unwrap();
    for x in 0..5 {
        for y in 0..5 {
            if x == 0 || y == 0 || x == 4 || y == 4 {
                put(&mut board, x, y, Black);
            }
        }
    }
    put(&mut board, 7, 7, White);

    let score = calculate_score(&board);
    assert_eq!(score.black, 9);
    assert_eq!(score.white, 0);
}

#[test]
fn test_captures_count_toward_score() {
    let mut board = BoardState::new(9).unwrap();
    put(&mut board, 0, 0, White);
    put(&mut board, 1, 0, Black);
    put(&mut board, 0, 1, Black);
    assert_eq!(board.captured_stones().black, 1);

    // Only black stones remain, so every empty point is black territory.
    let score = calculate_score(&board);
    assert_eq!(score.black, 1 + 79);
    assert_eq!(score.white, 0);
}

#[test]
fn test_neutral_territory_counts_for_nobody() {
    let mut board = BoardState::new(9).unwrap();
    put(&mut board, 1, 0, Black);
    put(&mut board, 0, 1, Black);
    put(&mut board, 7, 7, White);

    let score = calculate_score(&board);
    assert_eq!(score.black, 1); // the enclosed corner point
    assert_eq!(score.white, 0);
}

#[test]
fn test_winner() {
    assert_eq!(Score { black: 10, white: 4 }.winner(), Some(Black));
    assert_eq!(Score { black: 3, white: 9 }.winner(), Some(White));
    assert_eq!(Score { black: 7, white: 7 }.winner(), None);
}
