//! Immutable game states and successor generation.

use tracing::debug;

use crate::board::Board;
use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::{DimensionError, MoveError};

/// One position in a game: a board plus whose turn it is, with the
/// terminal flag and per-player scores derived once at construction.
///
/// States are immutable; playing a move produces a new state. A state
/// that is not `end_of_game` always offers the side to move at least
/// one legal move, because forced passes are resolved by the
/// constructor. Consequently [`GameState::successors`] is empty exactly
/// when the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Disc,
    end_of_game: bool,
    scores: [u32; Disc::COUNT],
}

impl GameState {
    /// The standard opening position: central four discs, Dark to move.
    pub fn initial(width: usize, height: usize) -> Result<GameState, DimensionError> {
        Ok(GameState::new(
            Board::starting_position(width, height)?,
            Disc::Dark,
        ))
    }

    /// Build a state from a board and the side nominally to move.
    ///
    /// If that side has no legal move the turn passes to the opponent;
    /// if neither side can move the state is terminal.
    pub fn new(board: Board, to_move: Disc) -> GameState {
        let scores = [
            board.count(Disc::Dark) as u32,
            board.count(Disc::Light) as u32,
        ];
        let mut to_move = to_move;
        let mut end_of_game = false;
        if !board.has_legal_move(to_move) {
            if board.has_legal_move(to_move.opponent()) {
                debug!(stuck = %to_move, "forced pass");
                to_move = to_move.opponent();
            } else {
                end_of_game = true;
            }
        }
        GameState {
            board,
            to_move,
            end_of_game,
            scores,
        }
    }

    /// The board of this position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move. Meaningless when the game is over.
    #[inline]
    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    /// Return `true` if neither side has a legal move left.
    #[inline]
    pub fn end_of_game(&self) -> bool {
        self.end_of_game
    }

    /// Disc counts as a (Dark, Light) pair.
    #[inline]
    pub fn scores(&self) -> (u32, u32) {
        (self.scores[Disc::Dark.index()], self.scores[Disc::Light.index()])
    }

    /// Disc count for one side.
    #[inline]
    pub fn score(&self, disc: Disc) -> u32 {
        self.scores[disc.index()]
    }

    /// Total number of discs placed.
    #[inline]
    pub fn score_sum(&self) -> u32 {
        self.scores[0] + self.scores[1]
    }

    /// The side with more discs, or `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        let (dark, light) = self.scores();
        if dark > light {
            Some(Disc::Dark)
        } else if light > dark {
            Some(Disc::Light)
        } else {
            None
        }
    }

    /// Legal moves for the side to move, in row-major cell order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.end_of_game {
            Vec::new()
        } else {
            self.board.legal_moves(self.to_move)
        }
    }

    /// Play a move for the side to move, returning the resulting state.
    pub fn play(&self, cell: Coord) -> Result<GameState, MoveError> {
        let board = self.board.apply(cell, self.to_move)?;
        Ok(GameState::new(board, self.to_move.opponent()))
    }

    /// All states reachable in one move, in the order of
    /// [`GameState::legal_moves`]. Empty exactly when the game is over.
    pub fn successors(&self) -> Vec<GameState> {
        self.legal_moves()
            .into_iter()
            .filter_map(|cell| self.play(cell).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::coord::Coord;
    use crate::disc::Disc;

    #[test]
    fn initial_state() {
        let state = GameState::initial(8, 8).unwrap();
        assert_eq!(state.to_move(), Disc::Dark);
        assert!(!state.end_of_game());
        assert_eq!(state.scores(), (2, 2));
        assert_eq!(state.score_sum(), 4);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn play_alternates_turns() {
        let state = GameState::initial(8, 8).unwrap();
        let next = state.play(Coord::new(2, 3)).unwrap();
        assert_eq!(next.to_move(), Disc::Light);
        assert_eq!(next.scores(), (4, 1));
    }

    #[test]
    fn successors_match_legal_moves() {
        let state = GameState::initial(8, 8).unwrap();
        let successors = state.successors();
        assert_eq!(successors.len(), 4);
        assert_eq!(successors.len(), state.legal_moves().len());
        for successor in &successors {
            assert_eq!(successor.score_sum(), 5);
        }
    }

    #[test]
    fn forced_pass_keeps_turn_with_mover() {
        // Dark plays d1 and captures the whole top row. The light disc
        // on a3 leaves Light without any reply while Dark can still
        // take it, so the turn stays with Dark.
        let state: GameState = "xoo1/4/o3/x3 x".parse().unwrap();
        let next = state.play(Coord::new(0, 3)).unwrap();
        assert_eq!(next.to_move(), Disc::Dark);
        assert!(!next.end_of_game());
        assert_eq!(next.scores(), (5, 1));
    }

    #[test]
    fn exhausted_position_is_terminal() {
        let state: GameState = "xxxx/xxxx/xxxx/xxxo x".parse().unwrap();
        assert!(state.end_of_game());
        assert_eq!(state.successors(), Vec::new());
        assert_eq!(state.scores(), (15, 1));
        assert_eq!(state.winner(), Some(Disc::Dark));
    }

    #[test]
    fn draw_has_no_winner() {
        let state: GameState = "xxxx/xxxx/oooo/oooo x".parse().unwrap();
        assert!(state.end_of_game());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn stuck_side_passes_at_construction() {
        // Light is nominally on turn but has no legal reply; the
        // constructor hands the turn straight back to Dark.
        let state: GameState = "xo2/4/4/4 o".parse().unwrap();
        assert!(!state.end_of_game());
        assert_eq!(state.to_move(), Disc::Dark);
    }
}
