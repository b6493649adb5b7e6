//! Engine error types.

use otello_core::Disc;

/// Errors a strategy can report when asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The side on turn has no legal move. Callers are expected to
    /// test [`GameState::end_of_game`](otello_core::GameState) before
    /// asking for a move, so hitting this means they did not.
    #[error("no legal move for {side}")]
    NoLegalMove { side: Disc },

    /// The strategy was handed a position where the opponent is on
    /// turn.
    #[error("engine plays {engine} but {to_move} is to move")]
    WrongTurn { engine: Disc, to_move: Disc },
}
