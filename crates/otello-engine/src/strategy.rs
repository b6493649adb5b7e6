//! Playing strategies: the minimax engine and a random baseline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use otello_core::{Disc, GameState};

use crate::error::EngineError;
use crate::eval::evaluate;
use crate::search::choose_move;

/// A contender that picks successor positions for one side of a game.
///
/// Strategies are bound to a disc when constructed and refuse to move
/// for the other side. Callers are expected to skip finished games;
/// asking a strategy to move in one is an error, not a pass.
pub trait Strategy {
    /// Display name for match logs.
    fn name(&self) -> &str;

    /// The disc this strategy plays.
    fn disc(&self) -> Disc;

    /// Pick the next position from `state`, which must have this
    /// strategy's disc on turn and at least one legal move.
    fn choose(&mut self, state: &GameState) -> Result<GameState, EngineError>;
}

fn check_turn(disc: Disc, state: &GameState) -> Result<(), EngineError> {
    if state.to_move() != disc {
        return Err(EngineError::WrongTurn {
            engine: disc,
            to_move: state.to_move(),
        });
    }
    Ok(())
}

/// Depth-limited minimax player over the composite evaluation.
pub struct Minimax {
    name: String,
    disc: Disc,
    depth: u8,
}

impl Minimax {
    /// Create a minimax strategy playing `disc`, searching `depth`
    /// plies from the root.
    pub fn new(name: impl Into<String>, disc: Disc, depth: u8) -> Minimax {
        Minimax {
            name: name.into(),
            disc,
            depth,
        }
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &str {
        &self.name
    }

    fn disc(&self) -> Disc {
        self.disc
    }

    fn choose(&mut self, state: &GameState) -> Result<GameState, EngineError> {
        check_turn(self.disc, state)?;
        let max_disc = self.disc;
        let decision = choose_move(state, self.depth, |s: &GameState| evaluate(s, max_disc))
            .ok_or(EngineError::NoLegalMove { side: self.disc })?;
        debug!(
            name = %self.name,
            value = decision.value,
            nodes = decision.stats.nodes,
            leaves = decision.stats.leaves,
            "minimax decision"
        );
        Ok(decision.state)
    }
}

/// Uniformly random player, seeded for reproducible games.
pub struct Random {
    name: String,
    disc: Disc,
    rng: StdRng,
}

impl Random {
    /// Create a random strategy playing `disc` from a fixed seed.
    pub fn new(name: impl Into<String>, disc: Disc, seed: u64) -> Random {
        Random {
            name: name.into(),
            disc,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for Random {
    fn name(&self) -> &str {
        &self.name
    }

    fn disc(&self) -> Disc {
        self.disc
    }

    fn choose(&mut self, state: &GameState) -> Result<GameState, EngineError> {
        check_turn(self.disc, state)?;
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(EngineError::NoLegalMove { side: self.disc });
        }
        let pick = self.rng.gen_range(0..successors.len());
        Ok(successors.swap_remove(pick))
    }
}

// -------------------------------------------------------------- Tests
