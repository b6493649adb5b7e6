//! Legal-move-count metric.

use otello_core::{Board, Disc};

use crate::eval::balance;

/// Relative freedom of movement, Dark-positive, in [-100, 100].
///
/// Both sides are counted on the same board regardless of whose turn
/// it actually is. A position where neither side can move scores 0.
pub fn mobility(board: &Board) -> f64 {
    balance(
        board.count_legal_moves(Disc::Dark),
        board.count_legal_moves(Disc::Light),
    )
}
