//! The playing board: disc placement, capture scanning, and move application.

use std::fmt;

use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::{DimensionError, MoveError};

/// A scan direction as a row/column delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    /// Row delta, positive toward higher row numbers.
    pub dr: i8,
    /// Column delta, positive toward later column letters.
    pub dc: i8,
}

impl Direction {
    /// All eight compass directions, in reading order.
    pub const ALL: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];

    /// One sense of each of the four board axes: horizontal, vertical,
    /// and both diagonals. [`Direction::reverse`] gives the other sense.
    pub const AXES: [Direction; 4] = [
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
        Direction { dr: 1, dc: -1 },
    ];

    /// Return the opposite sense of this direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}

/// A rectangular Reversi board.
///
/// Cells are stored row-major; `None` is an empty cell. Dimensions are
/// validated once at construction: both even, at least 4, and at most
/// 26 columns so that every cell has an algebraic name.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Disc>>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn empty(width: usize, height: usize) -> Result<Board, DimensionError> {
        Self::check_dimensions(width, height)?;
        Ok(Board {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Create a board with the standard central four-disc setup.
    pub fn starting_position(width: usize, height: usize) -> Result<Board, DimensionError> {
        let mut board = Board::empty(width, height)?;
        let row = height / 2 - 1;
        let col = width / 2 - 1;
        board.set(Coord::new(row, col), Some(Disc::Light));
        board.set(Coord::new(row, col + 1), Some(Disc::Dark));
        board.set(Coord::new(row + 1, col), Some(Disc::Dark));
        board.set(Coord::new(row + 1, col + 1), Some(Disc::Light));
        Ok(board)
    }

    /// Construct a board from raw cells. Used by position parsing.
    pub(crate) fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Option<Disc>>,
    ) -> Result<Board, DimensionError> {
        Self::check_dimensions(width, height)?;
        debug_assert_eq!(cells.len(), width * height);
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    fn check_dimensions(width: usize, height: usize) -> Result<(), DimensionError> {
        if width < 4 || height < 4 {
            return Err(DimensionError::TooSmall { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(DimensionError::Odd { width, height });
        }
        if width > 26 {
            return Err(DimensionError::TooWide { width });
        }
        Ok(())
    }

    /// Board width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Return `true` if the cell lies on the board.
    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        cell.row() < self.height && cell.col() < self.width
    }

    /// Return the disc on the given cell, or `None` if the cell is
    /// empty or off the board.
    #[inline]
    pub fn get(&self, cell: Coord) -> Option<Disc> {
        if self.contains(cell) {
            self.cells[cell.row() * self.width + cell.col()]
        } else {
            None
        }
    }

    fn set(&mut self, cell: Coord, value: Option<Disc>) {
        debug_assert!(self.contains(cell));
        self.cells[cell.row() * self.width + cell.col()] = value;
    }

    /// Count the discs of one color.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells.iter().filter(|&&c| c == Some(disc)).count()
    }

    /// Total number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The four corner cells.
    pub fn corners(&self) -> [Coord; 4] {
        [
            Coord::new(0, 0),
            Coord::new(0, self.width - 1),
            Coord::new(self.height - 1, 0),
            Coord::new(self.height - 1, self.width - 1),
        ]
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    /// The neighbor of `cell` one step along `dir`, or `None` at the edge.
    pub fn step(&self, cell: Coord, dir: Direction) -> Option<Coord> {
        let row = cell.row() as isize + dir.dr as isize;
        let col = cell.col() as isize + dir.dc as isize;
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            None
        } else {
            Some(Coord::new(row as usize, col as usize))
        }
    }

    /// Opposing discs that placing `disc` on `cell` would bracket along
    /// `dir`. Empty when the run is not closed by an own disc.
    fn captures_along(&self, cell: Coord, disc: Disc, dir: Direction) -> Vec<Coord> {
        let mut run = Vec::new();
        let mut cur = self.step(cell, dir);
        while let Some(c) = cur {
            match self.get(c) {
                Some(d) if d == disc.opponent() => {
                    run.push(c);
                    cur = self.step(c, dir);
                }
                Some(_) => return run,
                None => break,
            }
        }
        Vec::new()
    }

    /// Return `true` if placing `disc` on `cell` is a legal move.
    pub fn is_legal(&self, cell: Coord, disc: Disc) -> bool {
        self.contains(cell)
            && self.get(cell).is_none()
            && Direction::ALL
                .iter()
                .any(|&dir| !self.captures_along(cell, disc, dir).is_empty())
    }

    /// All legal moves for `disc`, in row-major cell order.
    pub fn legal_moves(&self, disc: Disc) -> Vec<Coord> {
        self.cells()
            .filter(|&cell| self.is_legal(cell, disc))
            .collect()
    }

    /// Number of legal moves available to `disc`.
    pub fn count_legal_moves(&self, disc: Disc) -> usize {
        self.cells().filter(|&cell| self.is_legal(cell, disc)).count()
    }

    /// Return `true` if `disc` has at least one legal move.
    pub fn has_legal_move(&self, disc: Disc) -> bool {
        self.cells().any(|cell| self.is_legal(cell, disc))
    }

    /// Apply a move: place `disc` on `cell` and flip every bracketed
    /// opposing disc, returning the resulting board.
    pub fn apply(&self, cell: Coord, disc: Disc) -> Result<Board, MoveError> {
        if !self.contains(cell) {
            return Err(MoveError::OutOfBounds { cell });
        }
        if self.get(cell).is_some() {
            return Err(MoveError::Occupied { cell });
        }

        let mut flips = Vec::new();
        for dir in Direction::ALL {
            flips.extend(self.captures_along(cell, disc, dir));
        }
        if flips.is_empty() {
            return Err(MoveError::NoFlips { cell });
        }

        let mut next = self.clone();
        next.set(cell, Some(disc));
        for flip in flips {
            next.set(flip, Some(disc));
        }
        Ok(next)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a framed grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..board.height() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..board.width() {
                let c = match board.get(Coord::new(row, col)) {
                    Some(disc) => disc.to_char(),
                    None => '.',
                };
                if col + 1 < board.width() {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..board.width() {
            let letter = (b'a' + col as u8) as char;
            if col + 1 < board.width() {
                write!(f, "{letter} ")?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
