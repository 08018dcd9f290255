use super::*;
use crate::rules::place_stone;
use crate::types::StoneColor::{Black, White};
use serde_json::json;

fn sample_board() -> BoardState {
    let mut board = BoardState::new(9).unwrap();
    place_stone(&mut board, Point::new(0, 0), White).unwrap();
    place_stone(&mut board, Point::new(1, 0), Black).unwrap();
    place_stone(&mut board, Point::new(0, 1), Black).unwrap(); // captures the corner
    board.record_pass(White);
    board
}

#[test]
fn test_round_trip_preserves_state() {
    let board = sample_board();
    let snapshot = Snapshot::capture(&board);
    let restored = snapshot.restore().unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_json_shape_matches_contract() {
    let board = sample_board();
    let value = serde_json::to_value(Snapshot::capture(&board)).unwrap();

    assert_eq!(value["size"], json!(9));
    assert_eq!(value["grid"][1][0], json!("black"));
    assert_eq!(value["grid"][0][0], json!(null));
    assert_eq!(value["capturedStones"], json!({"black": 1, "white": 0}));
    assert_eq!(value["koPosition"], json!(null));

    let history = value["moveHistory"].as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0]["position"], json!({"x": 0, "y": 0}));
    assert_eq!(history[0]["color"], json!("white"));
    assert_eq!(history[2]["capturedStones"], json!(1));
    assert_eq!(history[3]["position"], json!(null));
    assert!(history[0]["timestamp"].is_u64());
}

#[test]
fn test_json_round_trip() {
    let snapshot = Snapshot::capture(&sample_board());
    let text = serde_json::to_string(&snapshot).unwrap();
    let parsed: Snapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_restore_rejects_bad_size() {
    let mut snapshot = Snapshot::capture(&sample_board());
    snapshot.size = 8;
    assert_eq!(snapshot.restore(), Err(SnapshotError::InvalidSize(8)));
}

#[test]
fn test_restore_rejects_malformed_grid() {
    let mut snapshot = Snapshot::capture(&sample_board());
    snapshot.grid.pop();
    assert_eq!(snapshot.restore(), Err(SnapshotError::GridShape));

    let mut snapshot = Snapshot::capture(&sample_board());
    snapshot.grid[3].push(None);
    assert_eq!(snapshot.restore(), Err(SnapshotError::GridShape));
}
