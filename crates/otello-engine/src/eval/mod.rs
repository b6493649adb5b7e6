//! Composite positional evaluation.
//!
//! A position is scored by four metrics, each a relative advantage in
//! [-100, 100] with Dark as the positive side: disc [`material`],
//! move-count [`mobility`], [`corners`] held, and disc [`stability`].
//! The metrics are blended with weights picked by the game [`Phase`],
//! so the engine values freedom of movement early and raw disc count
//! late. Finished games skip the metrics entirely and score as the
//! exact disc differential.

pub mod corners;
pub mod material;
pub mod mobility;
pub mod phase;
pub mod stability;

use otello_core::{Disc, GameState};

pub use corners::corners;
pub use material::material;
pub use mobility::mobility;
pub use phase::Phase;
pub use stability::stability;

/// Relative advantage percentage `100 * (a - b) / (a + b)`, taken as 0
/// when both counts are 0.
pub(crate) fn balance(a: usize, b: usize) -> f64 {
    let total = a + b;
    if total == 0 {
        0.0
    } else {
        100.0 * (a as f64 - b as f64) / total as f64
    }
}

/// Score `state` from the point of view of `max_disc`.
///
/// Terminal positions get the exact signed disc differential, so a won
/// endgame always outranks any heuristic score within the metric range.
/// Everything is computed Dark-positive and flipped once at the end
/// when the maximizing side plays Light.
pub fn evaluate(state: &GameState, max_disc: Disc) -> f64 {
    let dark_view = if state.end_of_game() {
        let (dark, light) = state.scores();
        f64::from(dark) - f64::from(light)
    } else {
        let board = state.board();
        let weights = Phase::of(board, state.score_sum()).weights();
        weights.stability * stability(board)
            + weights.mobility * mobility(board)
            + weights.corners * corners(board)
            + weights.material * material(board)
    };

    match max_disc {
        Disc::Dark => dark_view,
        Disc::Light => -dark_view,
    }
}
