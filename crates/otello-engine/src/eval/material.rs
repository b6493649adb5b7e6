//! Disc-count metric.

use otello_core::{Board, Disc};

use crate::eval::balance;

/// Relative disc advantage, Dark-positive, in [-100, 100].
pub fn material(board: &Board) -> f64 {
    balance(board.count(Disc::Dark), board.count(Disc::Light))
}
