//! Game phase detection and the per-phase blend weights.
//!
//! How far a game has progressed is judged by the number of discs on
//! the board, scaled so that the same thresholds work on any board
//! size. The stage factor is `(area - 4) / 60`, which is exactly 1 on
//! the standard 8x8 board where 60 placements follow the 4 starting
//! discs.

use otello_core::Board;

/// Disc-count thresholds that split a game into phases, expressed for
/// the 8x8 board and scaled by [`stage`] elsewhere.
const OPENING_LIMIT: f64 = 20.0;
const ENDGAME_START: f64 = 54.0;

/// Scale factor mapping 8x8 phase thresholds onto `board`'s size.
pub fn stage(board: &Board) -> f64 {
    (board.area() as f64 - 4.0) / 60.0
}

/// Blend weights applied to the four positional metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub stability: f64,
    pub mobility: f64,
    pub corners: f64,
    pub material: f64,
}

/// Phase of the game, by discs placed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

impl Phase {
    /// Classify a position with `placed` discs on `board`.
    ///
    /// Both boundary counts fall in the outer phases: exactly
    /// `20 * stage` discs is still the opening and exactly `54 * stage`
    /// is already the endgame.
    pub fn of(board: &Board, placed: u32) -> Phase {
        let stage = stage(board);
        let placed = placed as f64;
        if placed <= OPENING_LIMIT * stage {
            Phase::Opening
        } else if placed >= ENDGAME_START * stage {
            Phase::Endgame
        } else {
            Phase::Midgame
        }
    }

    /// The metric weights for this phase.
    ///
    /// Early play favours stability and mobility, the midgame shifts
    /// onto corner control, and the endgame is dominated by corners
    /// and raw disc count.
    pub fn weights(self) -> Weights {
        match self {
            Phase::Opening => Weights {
                stability: 0.45,
                mobility: 0.30,
                corners: 0.05,
                material: 0.20,
            },
            Phase::Midgame => Weights {
                stability: 0.30,
                mobility: 0.20,
                corners: 0.45,
                material: 0.05,
            },
            Phase::Endgame => Weights {
                stability: 0.20,
                mobility: 0.05,
                corners: 0.30,
                material: 0.45,
            },
        }
    }
}
