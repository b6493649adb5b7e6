//! Board cell coordinates and their algebraic names.

use std::fmt;

/// A cell on the board, identified by zero-based row and column.
///
/// Row 0 is the top row as printed. A cell's name is its column letter
/// followed by the one-based row number, so `a1` is the top-left cell
/// and `c4` is column 2, row 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate from zero-based row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Return the zero-based row.
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Return the zero-based column.
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Parse a cell name (e.g. "e4") into a coordinate.
    ///
    /// Accepts column letters `a..z` and row numbers starting at 1.
    /// Whether the cell actually lies on a given board is checked by
    /// [`Board::contains`](crate::Board::contains).
    pub fn from_name(s: &str) -> Option<Coord> {
        let mut chars = s.chars();
        let col_char = chars.next()?;
        if !col_char.is_ascii_lowercase() {
            return None;
        }
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row_number: usize = rest.parse().ok()?;
        if row_number == 0 {
            return None;
        }
        Some(Coord {
            row: row_number - 1,
            col: (col_char as u8 - b'a') as usize,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
