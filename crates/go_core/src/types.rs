use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneColor {
    Black,
    White,
}

impl StoneColor {
    pub fn opponent(self) -> StoneColor {
        match self {
            StoneColor::Black => StoneColor::White,
            StoneColor::White => StoneColor::Black,
        }
    }

    /// Sign applied to Black-perspective evaluation terms.
    pub fn sign(self) -> f64 {
        match self {
            StoneColor::Black => 1.0,
            StoneColor::White => -1.0,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            StoneColor::Black => 0,
            StoneColor::White => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Stones each side has captured so far. Never decreases during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedStones {
    pub black: u32,
    pub white: u32,
}

impl CapturedStones {
    pub fn for_color(self, color: StoneColor) -> u32 {
        match color {
            StoneColor::Black => self.black,
            StoneColor::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: StoneColor, count: u32) {
        match color {
            StoneColor::Black => self.black += count,
            StoneColor::White => self.white += count,
        }
    }
}

/// One entry of the move history. `position: None` records a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub position: Option<Point>,
    pub color: StoneColor,
    pub captured_stones: u32,
    /// Epoch milliseconds at the time the move committed.
    pub timestamp: u64,
}

/// Summary of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Opponent stones removed by this placement.
    pub captured: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds,
    Occupied,
    Suicide,
    KoViolation,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PlaceError::OutOfBounds => "position out of bounds",
            PlaceError::Occupied => "position occupied",
            PlaceError::Suicide => "suicide move",
            PlaceError::KoViolation => "ko violation",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for PlaceError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize(pub usize);

impl fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported board size {}", self.0)
    }
}

impl std::error::Error for InvalidBoardSize {}
