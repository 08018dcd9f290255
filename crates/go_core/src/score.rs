use crate::analysis::find_territories;
use crate::board::BoardState;
use crate::types::StoneColor;
use serde::{Deserialize, Serialize};

/// Final tally: captures plus owned territory. No komi is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// The leading color, or `None` on a draw.
    pub fn winner(self) -> Option<StoneColor> {
        if self.black > self.white {
            Some(StoneColor::Black)
        } else if self.white > self.black {
            Some(StoneColor::White)
        } else {
            None
        }
    }
}

/// Each side scores its captured stones plus the size of every territory it
/// owns outright. Neutral regions count for neither side. Deciding *when* to
/// score (e.g. after two consecutive passes) is the caller's job.
pub fn calculate_score(board: &BoardState) -> Score {
    let captured = board.captured_stones();
    let mut score = Score {
        black: captured.black,
        white: captured.white,
    };

    for territory in find_territories(board) {
        match territory.owner {
            Some(StoneColor::Black) => score.black += territory.size() as u32,
            Some(StoneColor::White) => score.white += territory.size() as u32,
            None => {}
        }
    }

    score
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
