//! Error types for notation parsing and rule violations.

use std::fmt;

use crate::coord::Coord;

/// Errors that occur when parsing a position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The string does not have exactly 2 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A row in the grid describes a different number of cells than the
    /// first row.
    BadRowLength {
        /// Zero-based row index.
        row_index: usize,
        /// Number of cells described.
        length: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
    /// An unrecognized character appeared in the grid.
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "x" or "o".
    InvalidSideToMove {
        /// The invalid side string.
        found: String,
    },
    /// The parsed grid has unplayable dimensions.
    BadDimensions {
        /// The underlying dimension error.
        source: DimensionError,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "expected 2 position fields, found {found}")
            }
            NotationError::BadRowLength {
                row_index,
                length,
                expected,
            } => {
                write!(
                    f,
                    "row {row_index} describes {length} cells, expected {expected}"
                )
            }
            NotationError::InvalidCellChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            NotationError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move: \"{found}\"")
            }
            NotationError::BadDimensions { source } => {
                write!(f, "unplayable dimensions: {source}")
            }
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::BadDimensions { source } => Some(source),
            _ => None,
        }
    }
}

impl From<DimensionError> for NotationError {
    fn from(source: DimensionError) -> Self {
        NotationError::BadDimensions { source }
    }
}

/// Errors from constructing a board with unplayable dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// One of the dimensions is below the 4-cell minimum.
    #[error("board of {width}x{height} is too small, minimum is 4x4")]
    TooSmall {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The central four-disc setup needs even dimensions.
    #[error("board of {width}x{height} must have even dimensions")]
    Odd {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Columns beyond `z` have no algebraic name.
    #[error("board width {width} exceeds the 26-column maximum")]
    TooWide {
        /// Requested width.
        width: usize,
    },
}

/// Errors from applying an illegal move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The cell lies outside the board.
    #[error("cell {cell} is off the board")]
    OutOfBounds {
        /// The offending cell.
        cell: Coord,
    },
    /// The cell already holds a disc.
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// The offending cell.
        cell: Coord,
    },
    /// The move brackets no opposing discs.
    #[error("move at {cell} flips no opposing discs")]
    NoFlips {
        /// The offending cell.
        cell: Coord,
    },
}
