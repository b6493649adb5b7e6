//! Search, evaluation, and playing strategies for otello.
//!
//! The crate builds on [`otello_core`] in three layers: [`eval`] scores
//! positions, [`search`] picks moves by depth-limited minimax with
//! alpha-beta pruning, and [`strategy`] wraps both behind the
//! [`Strategy`] trait that match runners drive.

pub mod error;
pub mod eval;
pub mod search;
pub mod strategy;

pub use error::EngineError;
pub use eval::evaluate;
pub use search::{Decision, GameTree, SearchStats, choose_move};
pub use strategy::{Minimax, Random, Strategy};
