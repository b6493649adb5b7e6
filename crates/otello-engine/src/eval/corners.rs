//! Corner-occupancy metric.
//!
//! Corner discs can never be flipped, so holding them anchors whole
//! edges. Only the four geometric corners count here; the stability
//! metric credits the discs they anchor.

use otello_core::{Board, Disc};

use crate::eval::balance;

/// Relative corner ownership, Dark-positive, in [-100, 100].
pub fn corners(board: &Board) -> f64 {
    let mut held = [0usize; Disc::COUNT];
    for corner in board.corners() {
        if let Some(disc) = board.get(corner) {
            held[disc.index()] += 1;
        }
    }
    balance(held[Disc::Dark.index()], held[Disc::Light.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_when_no_corner_is_taken() {
        let board = Board::starting_position(8, 8).unwrap();
        assert_eq!(corners(&board), 0.0);
    }

    #[test]
    fn zero_when_corners_split_evenly() {
        let board: Board = "x2o/4/4/o2x".parse().unwrap();
        assert_eq!(corners(&board), 0.0);
    }

    #[test]
    fn single_corner_swings_the_metric_fully() {
        let board: Board = "x3/4/4/4".parse().unwrap();
        assert_eq!(corners(&board), 100.0);

        let board: Board = "4/4/4/3o".parse().unwrap();
        assert_eq!(corners(&board), -100.0);
    }

    #[test]
    fn three_to_one_split() {
        let board: Board = "x2x/4/4/o2x".parse().unwrap();
        assert_eq!(corners(&board), 50.0);
    }
}
