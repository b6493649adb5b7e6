//! The match runner: two contenders, one game, a clock.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use otello_core::{Coord, Disc, GameState};
use otello_engine::{Minimax, Random, Strategy};

use crate::command::{ContenderSpec, MatchSettings};
use crate::error::CliError;
use crate::manual::Manual;

/// One contender's answer for a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The position after the contender's move.
    Move(GameState),
    /// The contender gives up the game.
    Resign,
}

/// A match participant: an engine strategy or a person.
pub enum Contender {
    Engine(Box<dyn Strategy>),
    Human(Manual),
}

impl Contender {
    /// Display name for match logs.
    pub fn name(&self) -> &str {
        match self {
            Contender::Engine(strategy) => strategy.name(),
            Contender::Human(manual) => manual.name(),
        }
    }

    fn take_turn(&mut self, state: &GameState) -> Result<Turn, CliError> {
        match self {
            Contender::Engine(strategy) => Ok(Turn::Move(strategy.choose(state)?)),
            Contender::Human(manual) => manual.take_turn(state),
        }
    }
}

/// Build the contender a spec describes, bound to `disc`.
pub fn contender(spec: &ContenderSpec, disc: Disc) -> Contender {
    match spec {
        ContenderSpec::Minimax { depth } => Contender::Engine(Box::new(Minimax::new(
            format!("minimax:{depth}"),
            disc,
            *depth,
        ))),
        ContenderSpec::Random { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            Contender::Engine(Box::new(Random::new(format!("random:{seed}"), disc, seed)))
        }
        ContenderSpec::Manual => Contender::Human(Manual::new(disc)),
    }
}

/// How a match came to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Neither side had a legal move left.
    Exhausted,
    /// This side took longer than the per-move budget.
    Timeout(Disc),
    /// This side resigned.
    Resignation(Disc),
}

/// A finished match.
#[derive(Debug)]
pub struct MatchOutcome {
    /// The position the match ended in.
    pub state: GameState,
    /// Why it ended.
    pub ending: Ending,
    /// Moves actually committed to the board.
    pub plies: u32,
}

impl MatchOutcome {
    /// The winning disc, or `None` for a draw.
    ///
    /// Timeouts and resignations decide the game regardless of the
    /// score on the board.
    pub fn winner(&self) -> Option<Disc> {
        match self.ending {
            Ending::Exhausted => self.state.winner(),
            Ending::Timeout(loser) | Ending::Resignation(loser) => Some(loser.opponent()),
        }
    }
}

/// Set up and run the match a [`MatchSettings`] describes.
pub fn run_match(settings: &MatchSettings) -> Result<MatchOutcome, CliError> {
    let start = GameState::initial(settings.width, settings.height)?;
    let dark = contender(&settings.dark, Disc::Dark);
    let light = contender(&settings.light, Disc::Light);
    play_match(start, dark, light, settings.move_budget)
}

/// Alternate the contenders on turn from `start` until the game ends,
/// forfeiting a contender whose move comes back over `budget`.
pub fn play_match(
    start: GameState,
    mut dark: Contender,
    mut light: Contender,
    budget: Duration,
) -> Result<MatchOutcome, CliError> {
    info!(
        dark = %dark.name(),
        light = %light.name(),
        width = start.board().width(),
        height = start.board().height(),
        budget_secs = budget.as_secs(),
        "match starting"
    );
    println!("{}", start.board().pretty());

    let mut state = start;
    let mut plies = 0u32;
    let ending = loop {
        if state.end_of_game() {
            break Ending::Exhausted;
        }
        let side = state.to_move();
        let mover = match side {
            Disc::Dark => &mut dark,
            Disc::Light => &mut light,
        };

        let clock = Instant::now();
        let turn = mover.take_turn(&state)?;
        let elapsed = clock.elapsed();

        let next = match turn {
            Turn::Resign => {
                info!(side = %side, "resigned");
                break Ending::Resignation(side);
            }
            Turn::Move(next) => next,
        };
        if elapsed > budget {
            warn!(
                side = %side,
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = budget.as_millis() as u64,
                "move came back over budget, game forfeited"
            );
            break Ending::Timeout(side);
        }

        plies += 1;
        if let Some(cell) = placed_cell(&state, &next) {
            info!(side = %side, cell = %cell, elapsed_ms = elapsed.as_millis() as u64, "played");
        }
        if !next.end_of_game() && next.to_move() == side {
            info!(side = %side.opponent(), "no reply, turn passes back");
        }
        state = next;

        let (dark_score, light_score) = state.scores();
        println!("{}", state.board().pretty());
        println!("score: x {dark_score} - o {light_score}");
    };

    let outcome = MatchOutcome {
        state,
        ending,
        plies,
    };
    report(&outcome);
    Ok(outcome)
}

fn report(outcome: &MatchOutcome) {
    let (dark_score, light_score) = outcome.state.scores();
    info!(
        ending = ?outcome.ending,
        winner = ?outcome.winner(),
        plies = outcome.plies,
        dark = dark_score,
        light = light_score,
        "match over"
    );
    match outcome.ending {
        Ending::Timeout(loser) => println!("{loser} forfeits on time"),
        Ending::Resignation(loser) => println!("{loser} resigns"),
        Ending::Exhausted => {}
    }
    match outcome.winner() {
        Some(winner) => println!("{winner} wins {dark_score}-{light_score}"),
        None => println!("draw {dark_score}-{light_score}"),
    }
}

/// The cell the move between `before` and `after` placed a disc on.
fn placed_cell(before: &GameState, after: &GameState) -> Option<Coord> {
    after.board().cells().find(|&cell| {
        before.board().get(cell).is_none() && after.board().get(cell).is_some()
    })
}

// -------------------------------------------------------------- Tests
