use crate::types::{CapturedStones, InvalidBoardSize, MoveRecord, Point, StoneColor};
use std::time::{SystemTime, UNIX_EPOCH};

/// Board sizes the engine accepts.
pub const BOARD_SIZES: [usize; 3] = [9, 13, 19];

/// Full game position: grid, capture counters, ko point, and move history.
///
/// Mutated only through `rules::place_stone` (atomic: a failed placement
/// leaves every field untouched) and `record_pass`. Clones serve as the
/// scratch copies used by move generation and search.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    size: usize,
    grid: Vec<Option<StoneColor>>,
    captured: CapturedStones,
    ko_position: Option<Point>,
    move_history: Vec<MoveRecord>,
}

impl BoardState {
    pub fn new(size: usize) -> Result<Self, InvalidBoardSize> {
        if !BOARD_SIZES.contains(&size) {
            return Err(InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            grid: vec![None; size * size],
            captured: CapturedStones::default(),
            ko_position: None,
            move_history: Vec::new(),
        })
    }

    pub(crate) fn from_parts(
        size: usize,
        grid: Vec<Option<StoneColor>>,
        captured: CapturedStones,
        ko_position: Option<Point>,
        move_history: Vec<MoveRecord>,
    ) -> Self {
        Self {
            size,
            grid,
            captured,
            ko_position,
            move_history,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_on_board(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn stone_at(&self, p: Point) -> Option<StoneColor> {
        if !self.is_on_board(p.x, p.y) {
            return None;
        }
        self.grid[self.index(p)]
    }

    fn index(&self, p: Point) -> usize {
        p.y * self.size + p.x
    }

    /// Orthogonal neighbors that lie on the board.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(4);
        if p.x > 0 {
            out.push(Point::new(p.x - 1, p.y));
        }
        if p.x + 1 < self.size {
            out.push(Point::new(p.x + 1, p.y));
        }
        if p.y > 0 {
            out.push(Point::new(p.x, p.y - 1));
        }
        if p.y + 1 < self.size {
            out.push(Point::new(p.x, p.y + 1));
        }
        out
    }

    /// Every intersection, column-major: (0,0), (0,1), ... matching the
    /// scan order move generation exposes as "first candidate".
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Point::new(x, y)))
    }

    pub fn stones(&self) -> impl Iterator<Item = (Point, StoneColor)> + '_ {
        self.all_points()
            .filter_map(move |p| self.stone_at(p).map(|c| (p, c)))
    }

    pub fn captured_stones(&self) -> CapturedStones {
        self.captured
    }

    pub fn ko_position(&self) -> Option<Point> {
        self.ko_position
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Record a pass for `color`. A pass is an intervening move, so it also
    /// lifts any standing ko prohibition.
    pub fn record_pass(&mut self, color: StoneColor) {
        self.ko_position = None;
        self.move_history.push(MoveRecord {
            position: None,
            color,
            captured_stones: 0,
            timestamp: unix_millis(),
        });
    }

    pub(crate) fn set_stone(&mut self, p: Point, stone: Option<StoneColor>) {
        let idx = self.index(p);
        self.grid[idx] = stone;
    }

    pub(crate) fn set_ko(&mut self, ko: Option<Point>) {
        self.ko_position = ko;
    }

    pub(crate) fn add_captured(&mut self, color: StoneColor, count: u32) {
        self.captured.add(color, count);
    }

    pub(crate) fn push_move(&mut self, position: Point, color: StoneColor, captured: u32) {
        self.move_history.push(MoveRecord {
            position: Some(position),
            color,
            captured_stones: captured,
            timestamp: unix_millis(),
        });
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
