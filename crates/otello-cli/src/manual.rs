//! A contender driven by a person typing cell names.

use std::io::{self, BufRead};

use otello_core::{Coord, Disc, GameState};

use crate::arena::Turn;
use crate::error::CliError;

/// Stdin-driven contender. Prompts for a cell name each turn and keeps
/// prompting until the input names a legal move, the player resigns
/// with `quit`, or the input ends.
pub struct Manual {
    name: String,
    disc: Disc,
}

impl Manual {
    /// Create a manual contender playing `disc`.
    pub fn new(disc: Disc) -> Manual {
        Manual {
            name: format!("manual:{disc}"),
            disc,
        }
    }

    /// Display name for match logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask the player for their move on `state`.
    pub fn take_turn(&mut self, state: &GameState) -> Result<Turn, CliError> {
        let stdin = io::stdin();
        self.take_turn_from(state, &mut stdin.lock())
    }

    fn take_turn_from(
        &mut self,
        state: &GameState,
        input: &mut impl BufRead,
    ) -> Result<Turn, CliError> {
        let mut line = String::new();
        loop {
            let moves = state
                .legal_moves()
                .iter()
                .map(Coord::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("{} ({}) to move. legal: {moves}", self.name, self.disc);

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // Input ended; treat it like a resignation.
                return Ok(Turn::Resign);
            }
            let entry = line.trim().to_ascii_lowercase();
            if entry.is_empty() {
                continue;
            }
            if entry == "quit" {
                return Ok(Turn::Resign);
            }
            let Some(cell) = Coord::from_name(&entry) else {
                println!("could not read {entry:?}, enter a cell like d3 or quit");
                continue;
            };
            match state.play(cell) {
                Ok(next) => return Ok(Turn::Move(next)),
                Err(err) => println!("{err}, try another cell"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn state() -> GameState {
        // Dark's one legal move is c1.
        "xo2/4/4/4 x".parse().unwrap()
    }

    fn turn(input: &str) -> Turn {
        let mut manual = Manual::new(Disc::Dark);
        manual
            .take_turn_from(&state(), &mut Cursor::new(input))
            .unwrap()
    }

    #[test]
    fn legal_cell_is_played() {
        let expected = state().play(Coord::new(0, 2)).unwrap();
        assert_eq!(turn("c1\n"), Turn::Move(expected));
    }

    #[test]
    fn cell_names_are_case_insensitive() {
        let expected = state().play(Coord::new(0, 2)).unwrap();
        assert_eq!(turn("C1\n"), Turn::Move(expected));
    }

    #[test]
    fn quit_resigns() {
        assert_eq!(turn("quit\n"), Turn::Resign);
    }

    #[test]
    fn end_of_input_resigns() {
        assert_eq!(turn(""), Turn::Resign);
    }

    #[test]
    fn bad_entries_are_retried_until_a_legal_move() {
        // Unreadable, off the board, occupied, flipless, then legal.
        let expected = state().play(Coord::new(0, 2)).unwrap();
        assert_eq!(turn("zz\nb9\na1\nd4\n\nc1\n"), Turn::Move(expected));
    }
}
