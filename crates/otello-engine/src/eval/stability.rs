//! Disc-stability metric.
//!
//! Every placed disc is graded by how exposed it is to being flipped.
//! A disc is scanned along each of the four board axes, in both senses,
//! skipping over friendly discs until the scan falls off the board,
//! hits an empty cell, or hits an opponent disc. The two scan ends of
//! an axis decide the grade:
//!
//! - reaching the edge through own discs in either sense protects the
//!   axis outright, since no flipping line can form across it
//! - an opponent on one side with an empty cell on the other means the
//!   opponent can complete a bracket right now, so the disc is unstable
//! - opponents on both sides can never flip the disc on this axis, but
//!   the position stays cramped, so the disc is only semi-stable
//! - empty cells on both sides leave the axis untouched for now
//!
//! A disc that survives every axis unscathed counts 2 points, a
//! semi-stable disc 1, an unstable disc 0, and the per-player sums are
//! compared.

use otello_core::{Board, Coord, Direction, Disc};

use crate::eval::balance;

/// What a directional scan from a disc runs into first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanEnd {
    /// Own discs all the way off the board.
    OwnToEdge,
    /// An empty cell.
    Empty,
    /// An opponent disc.
    Opponent,
}

/// Walk from `cell` along `dir`, skipping discs of `own`, and report
/// what ends the run.
fn scan(board: &Board, cell: Coord, own: Disc, dir: Direction) -> ScanEnd {
    let mut at = cell;
    loop {
        let Some(next) = board.step(at, dir) else {
            return ScanEnd::OwnToEdge;
        };
        match board.get(next) {
            Some(disc) if disc == own => at = next,
            Some(_) => return ScanEnd::Opponent,
            None => return ScanEnd::Empty,
        }
    }
}

/// Stability points for the disc of `own` at `cell`: 2 stable, 1
/// semi-stable, 0 unstable.
fn classify(board: &Board, cell: Coord, own: Disc) -> u32 {
    let mut cramped = false;
    for dir in Direction::AXES {
        let ahead = scan(board, cell, own, dir);
        let behind = scan(board, cell, own, dir.reverse());
        match (ahead, behind) {
            (ScanEnd::OwnToEdge, _) | (_, ScanEnd::OwnToEdge) => {}
            (ScanEnd::Opponent, ScanEnd::Empty) | (ScanEnd::Empty, ScanEnd::Opponent) => {
                return 0;
            }
            (ScanEnd::Opponent, ScanEnd::Opponent) => cramped = true,
            (ScanEnd::Empty, ScanEnd::Empty) => {}
        }
    }
    if cramped { 1 } else { 2 }
}

/// Relative stability of the two armies, Dark-positive, in [-100, 100].
pub fn stability(board: &Board) -> f64 {
    let mut points = [0u32; Disc::COUNT];
    for cell in board.cells() {
        if let Some(disc) = board.get(cell) {
            points[disc.index()] += classify(board, cell, disc);
        }
    }
    balance(
        points[Disc::Dark.index()] as usize,
        points[Disc::Light.index()] as usize,
    )
}
