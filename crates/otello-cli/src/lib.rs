//! Match running and the command-line surface for otello.

pub mod arena;
pub mod command;
pub mod error;
pub mod manual;

pub use arena::{Contender, Ending, MatchOutcome, play_match, run_match};
pub use command::{ContenderSpec, MatchSettings, USAGE, parse_args};
pub use error::CliError;
