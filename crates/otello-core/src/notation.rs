//! Position string parsing and serialization for [`Board`] and [`GameState`].
//!
//! A board is written as its rows from top to bottom separated by `/`,
//! with `x`/`o` for discs and digit runs for consecutive empty cells. A
//! full position appends the side to move: `"8/8/8/3ox3/3xo3/8/8/8 x"`.
//! Dimensions are inferred from the grid.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::NotationError;
use crate::state::GameState;

/// The position string for the standard 8x8 starting position.
pub const STANDARD_START: &str = "8/8/8/3ox3/3xo3/8/8/8 x";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(grid: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = grid.split('/').collect();
        let height = rows.len();

        let mut cells: Vec<Option<Disc>> = Vec::new();
        let mut width = 0;

        for (row_index, row_str) in rows.iter().enumerate() {
            let mut row_len = 0;
            let mut run = 0usize;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    run = run * 10 + digit as usize;
                } else {
                    let disc =
                        Disc::from_char(c).ok_or(NotationError::InvalidCellChar { character: c })?;
                    cells.extend(std::iter::repeat_n(None, run));
                    row_len += run;
                    run = 0;
                    cells.push(Some(disc));
                    row_len += 1;
                }
            }
            cells.extend(std::iter::repeat_n(None, run));
            row_len += run;

            if row_index == 0 {
                width = row_len;
            } else if row_len != width {
                return Err(NotationError::BadRowLength {
                    row_index,
                    length: row_len,
                    expected: width,
                });
            }
        }

        Ok(Board::from_cells(width, height, cells)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            let mut empty_run = 0;
            for col in 0..self.width() {
                match self.get(Coord::new(row, col)) {
                    Some(disc) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", disc.to_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row + 1 < self.height() {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for GameState {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<GameState, NotationError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board: Board = fields[0].parse()?;

        let to_move = match fields[1] {
            "x" => Disc::Dark,
            "o" => Disc::Light,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                });
            }
        };

        Ok(GameState::new(board, to_move))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board(), self.to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::STANDARD_START;
    use crate::board::Board;
    use crate::state::GameState;

    fn roundtrip(position: &str) {
        let state: GameState = position.parse().unwrap();
        let output = format!("{state}");
        assert_eq!(output, position, "position roundtrip failed");
        let state2: GameState = output.parse().unwrap();
        assert_eq!(state, state2);
    }

    #[test]
    fn roundtrip_standard_start() {
        roundtrip(STANDARD_START);
    }

    #[test]
    fn roundtrip_after_one_move() {
        roundtrip("8/8/3x4/3xx3/3xo3/8/8/8 o");
    }

    #[test]
    fn roundtrip_rectangular() {
        roundtrip("6/2ox2/2xo2/6 x");
    }

    #[test]
    fn roundtrip_terminal() {
        roundtrip("xxxx/xxxx/xxxx/xxxo x");
    }

    #[test]
    fn roundtrip_wide_board_multi_digit_runs() {
        roundtrip("10/3xo5/2x2o4/xo3xo3/10/10 o");
    }

    #[test]
    fn initial_matches_standard_start() {
        let from_constructor = GameState::initial(8, 8).unwrap();
        let from_string: GameState = STANDARD_START.parse().unwrap();
        assert_eq!(from_constructor, from_string);
    }

    #[test]
    fn board_display_is_bare_grid() {
        let board = Board::starting_position(8, 8).unwrap();
        assert_eq!(format!("{board}"), "8/8/8/3ox3/3xo3/8/8/8");
    }

    #[test]
    fn board_parse_infers_dimensions() {
        let board: Board = "6/2ox2/2xo2/6".parse().unwrap();
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 4);
    }

    #[test]
    fn error_wrong_field_count() {
        assert!("8/8/8/3ox3/3xo3/8/8/8".parse::<GameState>().is_err());
        assert!("8/8/8/3ox3/3xo3/8/8/8 x y".parse::<GameState>().is_err());
    }

    #[test]
    fn error_bad_row_length() {
        let result = "8/7/8/3ox3/3xo3/8/8/8 x".parse::<GameState>();
        assert!(result.is_err());
    }

    #[test]
    fn error_invalid_cell_char() {
        let result = "8/8/8/3pq3/3xo3/8/8/8 x".parse::<GameState>();
        assert!(result.is_err());
    }

    #[test]
    fn error_invalid_side_to_move() {
        let result = "8/8/8/3ox3/3xo3/8/8/8 w".parse::<GameState>();
        assert!(result.is_err());
    }

    #[test]
    fn error_unplayable_dimensions() {
        assert!("xx/xx x".parse::<GameState>().is_err());
        assert!("xxx/xxx/xxx/xxx x".parse::<GameState>().is_err());
    }
}
