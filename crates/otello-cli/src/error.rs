//! Command-line and match-running errors.

use otello_core::DimensionError;
use otello_engine::EngineError;

/// Errors surfaced to the command-line user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An option flag that the program does not know.
    #[error("unknown option: {flag}")]
    UnknownOption {
        /// The flag as given on the command line.
        flag: String,
    },

    /// An option flag given without its value.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag that wanted a value.
        flag: String,
    },

    /// A contender spec that is neither minimax, random, nor manual.
    #[error("invalid contender spec: {spec}")]
    InvalidContender {
        /// The spec as given on the command line.
        spec: String,
    },

    /// The depth in a `minimax:DEPTH` spec could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// The seed in a `random:SEED` spec could not be parsed.
    #[error("invalid seed: {value}")]
    InvalidSeed {
        /// The seed string that failed to parse.
        value: String,
    },

    /// A board size that is not of the form `WxH`.
    #[error("invalid board size: {value}")]
    InvalidSize {
        /// The size string that failed to parse.
        value: String,
    },

    /// A per-move budget that is not a whole number of seconds.
    #[error("invalid budget: {value}")]
    InvalidBudget {
        /// The budget string that failed to parse.
        value: String,
    },

    /// The requested board dimensions cannot host a game.
    #[error("unplayable board size: {source}")]
    Dimensions {
        /// The underlying dimension error.
        #[from]
        source: DimensionError,
    },

    /// A strategy failed to produce a move.
    #[error("engine failure: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// An I/O error occurred while reading player input.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use otello_core::Disc;

    #[test]
    fn display_formats() {
        let err = CliError::InvalidContender {
            spec: "alphabeta".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid contender spec: alphabeta");

        let err = CliError::MissingValue {
            flag: "--size".to_string(),
        };
        assert_eq!(format!("{err}"), "missing value for --size");
    }

    #[test]
    fn wraps_engine_errors() {
        let err: CliError = EngineError::NoLegalMove { side: Disc::Dark }.into();
        assert_eq!(format!("{err}"), "engine failure: no legal move for x");
    }

    #[test]
    fn wraps_dimension_errors() {
        let err: CliError = DimensionError::TooWide { width: 30 }.into();
        assert!(format!("{err}").starts_with("unplayable board size:"));
    }
}
