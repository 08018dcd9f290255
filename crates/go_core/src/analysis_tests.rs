use super::*;
use crate::rules::place_stone;
use crate::types::StoneColor::{Black, White};

fn put(board: &mut BoardState, x: usize, y: usize, color: StoneColor) {
    place_stone(board, Point::new(x, y), color).unwrap();
}

#[test]
fn test_single_stone_has_four_liberties() {
    let mut board = BoardState::new(19).unwrap();
    put(&mut board, 3, 3, Black);

    let group = find_group(&board, Point::new(3, 3));
    assert_eq!(group.len(), 1);
    assert_eq!(count_liberties(&board, &group), 4);
}

#[test]
fn test_adjacent_pair_has_six_liberties() {
    let mut board = BoardState::new(19).unwrap();
    put(&mut board, 3, 3, Black);
    put(&mut board, 3, 4, Black);

    let group = find_group(&board, Point::new(3, 3));
    assert_eq!(group.len(), 2);
    assert_eq!(count_liberties(&board, &group), 6);
}

#[test]
fn test_find_group_ignores_diagonals() {
    let mut board = BoardState::new(9).unwrap();
    put(&mut board, 2, 2, Black);
    put(&mut board, 2, 3, Black);
    put(&mut board, 3, 2, Black);
    put(&mut board, 4, 4, Black); // diagonal from (3,3), touches nothing

    let group = find_group(&board, Point::new(2, 2));
    assert_eq!(group.len(), 3);
    assert!(!group.contains(&Point::new(4, 4)));
}

#[test]
fn test_find_group_on_empty_point() {
    let board = BoardState::new(9).unwrap();
    assert!(find_group(&board, Point::new(4, 4)).is_empty());
}

#[test]
fn test_captured_groups_scan() {
    let mut board = BoardState::new(9).unwrap();
    put(&mut board, 0, 0, White);
    put(&mut board, 1, 0, Black);
    // The white corner stone still has (0,1): nothing is captured yet.
    assert!(find_captured_groups(&board, White).is_empty());
}

#[test]
fn test_territory_ownership() {
    let mut board = BoardState::new(9).unwrap();
    put(&mut board, 1, 0, Black);
    put(&mut board, 0, 1, Black);
    put(&mut board, 5, 5, White);

    let territories = find_territories(&board);
    let corner = territories
        .iter()
        .find(|t| t.points.contains(&Point::new(0, 0)))
        .unwrap();
    assert_eq!(corner.owner, Some(Black));
    assert_eq!(corner.size(), 1);

    let open = territories
        .iter()
        .find(|t| t.points.contains(&Point::new(8, 8)))
        .unwrap();
    assert_eq!(open.owner, None);
}

#[test]
fn test_border_stones_count_for_every_adjacent_region() {
    // A white wall splits the board; both halves border only white.
    let mut board = BoardState::new(9).unwrap();
    for y in 0..9 {
        put(&mut board, 4, y, White);
    }

    let territories = find_territories(&board);
    assert_eq!(territories.len(), 2);
    for territory in territories {
        assert_eq!(territory.owner, Some(White));
        assert_eq!(territory.size(), 36);
    }
}

#[test]
fn test_empty_board_is_one_neutral_region() {
    let board = BoardState::new(9).unwrap();
    let territories = find_territories(&board);
    assert_eq!(territories.len(), 1);
    assert_eq!(territories[0].size(), 81);
    assert_eq!(territories[0].owner, None);
}
