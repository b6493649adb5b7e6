//! Core Reversi types: board representation, move generation, and game rules.

mod board;
mod coord;
mod disc;
mod error;
mod notation;
mod state;

pub use board::{Board, Direction, PrettyBoard};
pub use coord::Coord;
pub use disc::Disc;
pub use error::{DimensionError, MoveError, NotationError};
pub use notation::STANDARD_START;
pub use state::GameState;
