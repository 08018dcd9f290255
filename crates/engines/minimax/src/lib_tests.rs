use super::*;
use go_core::StoneColor::{Black, White};
use go_core::{place_stone, Point, Snapshot};

fn capture_position() -> BoardState {
    let mut board = BoardState::new(9).unwrap();
    place_stone(&mut board, Point::new(0, 0), White).unwrap();
    place_stone(&mut board, Point::new(0, 1), White).unwrap();
    place_stone(&mut board, Point::new(1, 0), Black).unwrap();
    place_stone(&mut board, Point::new(1, 1), Black).unwrap();
    board
}

#[test]
fn deterministic_engine_takes_the_capture() {
    let mut engine = MinimaxEngine::with_seed(0.0, 3);
    let board = capture_position();

    let result = engine.search(&board, Black, SearchLimits::depth(2));

    assert_eq!(result.best_move, Some(Point::new(0, 2)));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
    assert!(!result.stopped);
}

#[test]
fn randomized_pick_stays_in_top_two() {
    let board = capture_position();
    let limits = SearchLimits::depth(2);
    let mut nodes = 0;
    let outcome = crate::search::score_root_moves(&board, Black, &limits, &mut nodes);
    let pool: Vec<Point> = outcome.moves.iter().take(2).map(|m| m.point).collect();

    let mut engine = MinimaxEngine::with_seed(1.0, 9);
    for _ in 0..10 {
        let result = engine.search(&board, Black, SearchLimits::depth(2));
        assert!(pool.contains(&result.best_move.unwrap()));
    }
}

#[test]
fn engine_passes_on_full_board() {
    let mut snapshot = Snapshot::capture(&BoardState::new(9).unwrap());
    for x in 0..9 {
        for y in 0..9 {
            snapshot.grid[x][y] = Some(if x < 5 { Black } else { White });
        }
    }
    let board = snapshot.restore().unwrap();

    let mut engine = MinimaxEngine::with_seed(0.1, 4);
    let result = engine.search(&board, Black, SearchLimits::depth(3));
    assert!(result.best_move.is_none());
}

#[test]
fn node_budget_reports_stopped_with_a_move() {
    let mut engine = MinimaxEngine::with_seed(0.0, 6);
    let board = capture_position();

    let result = engine.search(&board, Black, SearchLimits::depth_and_nodes(3, 1));

    assert!(result.stopped);
    assert!(result.best_move.is_some());
}

#[test]
fn same_seed_reproduces_choices() {
    let board = capture_position();
    let mut first = MinimaxEngine::with_seed(0.5, 21);
    let mut second = MinimaxEngine::with_seed(0.5, 21);

    for _ in 0..5 {
        let a = first.search(&board, Black, SearchLimits::depth(2));
        let b = second.search(&board, Black, SearchLimits::depth(2));
        assert_eq!(a.best_move, b.best_move);
    }
}
