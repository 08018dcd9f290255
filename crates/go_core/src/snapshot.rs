//! The external persistence contract: a plain serde struct the session
//! layer serializes however it likes (in practice JSON, with camelCase
//! keys and `"black"`/`"white"`/`null` grid cells).

use crate::board::{BoardState, BOARD_SIZES};
use crate::types::{CapturedStones, MoveRecord, Point, StoneColor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub size: usize,
    /// size×size cells; the outer index is x.
    pub grid: Vec<Vec<Option<StoneColor>>>,
    pub captured_stones: CapturedStones,
    pub ko_position: Option<Point>,
    pub move_history: Vec<MoveRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    InvalidSize(usize),
    GridShape,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::InvalidSize(size) => write!(f, "unsupported board size {}", size),
            SnapshotError::GridShape => write!(f, "grid does not match the declared size"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl Snapshot {
    pub fn capture(board: &BoardState) -> Self {
        let size = board.size();
        let mut grid = vec![vec![None; size]; size];
        for (p, color) in board.stones() {
            grid[p.x][p.y] = Some(color);
        }
        Self {
            size,
            grid,
            captured_stones: board.captured_stones(),
            ko_position: board.ko_position(),
            move_history: board.move_history().to_vec(),
        }
    }

    /// Rebuild a `BoardState`, rejecting malformed input instead of
    /// panicking: the size must be supported and the grid exactly
    /// size×size.
    pub fn restore(&self) -> Result<BoardState, SnapshotError> {
        if !BOARD_SIZES.contains(&self.size) {
            return Err(SnapshotError::InvalidSize(self.size));
        }
        if self.grid.len() != self.size {
            return Err(SnapshotError::GridShape);
        }

        let mut cells = vec![None; self.size * self.size];
        for (x, column) in self.grid.iter().enumerate() {
            if column.len() != self.size {
                return Err(SnapshotError::GridShape);
            }
            for (y, &stone) in column.iter().enumerate() {
                cells[y * self.size + x] = stone;
            }
        }

        Ok(BoardState::from_parts(
            self.size,
            cells,
            self.captured_stones,
            self.ko_position,
            self.move_history.clone(),
        ))
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
