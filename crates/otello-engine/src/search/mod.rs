//! Move selection by depth-limited minimax with alpha-beta pruning.

mod minimax;

use tracing::debug;

use otello_core::GameState;

use minimax::Role;
pub use minimax::SearchStats;

/// What the search needs from a game: a terminal test and successor
/// expansion in a stable order.
///
/// Implementations must guarantee that a node is terminal exactly when
/// [`GameTree::expand`] returns no successors.
pub trait GameTree: Sized {
    /// Whether this node ends the game.
    fn is_terminal(&self) -> bool;

    /// The nodes reachable in one move, in a deterministic order.
    fn expand(&self) -> Vec<Self>;
}

impl GameTree for GameState {
    fn is_terminal(&self) -> bool {
        self.end_of_game()
    }

    fn expand(&self) -> Vec<GameState> {
        self.successors()
    }
}

/// Outcome of one root decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<T> {
    /// The chosen successor.
    pub state: T,
    /// Its minimax value.
    pub value: f64,
    /// Work done across the whole decision.
    pub stats: SearchStats,
}

/// Pick the best immediate successor of `root` for the maximizing
/// player, or `None` when `root` has none.
///
/// Each successor is valued by the minimizing reply searched to
/// `max_depth - 1` further plies, every one from a fresh full
/// alpha-beta window. Ties keep the successor encountered first, so
/// the choice is deterministic for a given expansion order.
pub fn choose_move<T, F>(root: &T, max_depth: u8, mut evaluate: F) -> Option<Decision<T>>
where
    T: GameTree,
    F: FnMut(&T) -> f64,
{
    let mut stats = SearchStats::default();
    let mut best: Option<T> = None;
    let mut best_value = f64::NEG_INFINITY;

    for successor in root.expand() {
        let value = minimax::value(
            &successor,
            max_depth.saturating_sub(1),
            Role::Min,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut evaluate,
            &mut stats,
        );
        debug!(value, running_best = best_value, "valued root successor");
        if best.is_none() || value > best_value {
            best_value = value;
            best = Some(successor);
        }
    }

    best.map(|state| Decision {
        state,
        value: best_value,
        stats,
    })
}

// -------------------------------------------------------------- Tests

#[cfg(test)]
mod tests {
    use super::*;
    use otello_core::Coord;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        score: f64,
        children: Vec<Node>,
    }

    impl GameTree for Node {
        fn is_terminal(&self) -> bool {
            self.children.is_empty()
        }

        fn expand(&self) -> Vec<Node> {
            self.children.clone()
        }
    }

    fn leaf(score: f64) -> Node {
        Node {
            score,
            children: Vec::new(),
        }
    }

    fn branch(score: f64, children: Vec<Node>) -> Node {
        Node { score, children }
    }

    fn score(node: &Node) -> f64 {
        node.score
    }

    #[test]
    fn no_successors_yields_no_decision() {
        assert_eq!(choose_move(&leaf(1.0), 3, score), None);
    }

    #[test]
    fn single_successor_is_chosen_at_any_depth() {
        let tree = branch(0.0, vec![branch(2.0, vec![leaf(-8.0), leaf(6.0)])]);
        for depth in [0, 1, 4] {
            let decision = choose_move(&tree, depth, score).unwrap();
            assert_eq!(decision.state.score, 2.0, "depth {depth}");
        }
    }

    #[test]
    fn depth_zero_reduces_to_scoring_the_successors() {
        let tree = branch(
            0.0,
            vec![
                branch(1.0, vec![leaf(50.0)]),
                branch(7.0, vec![leaf(-50.0)]),
                branch(4.0, vec![leaf(0.0)]),
            ],
        );
        let decision = choose_move(&tree, 0, score).unwrap();
        assert_eq!(decision.state.score, 7.0);
        assert_eq!(decision.value, 7.0);
        assert_eq!(decision.stats, SearchStats { nodes: 0, leaves: 3 });
    }

    #[test]
    fn picks_the_line_with_the_best_guaranteed_reply() {
        // Values under best reply: 3, 2, 2. The first line wins even
        // though the third holds the single largest leaf.
        let tree = branch(
            0.0,
            vec![
                branch(1.0, vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
                branch(2.0, vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
                branch(3.0, vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
            ],
        );
        let decision = choose_move(&tree, 2, score).unwrap();
        assert_eq!(decision.state.score, 1.0);
        assert_eq!(decision.value, 3.0);
    }

    #[test]
    fn ties_keep_the_first_successor() {
        let tree = branch(
            0.0,
            vec![
                branch(1.0, vec![leaf(5.0)]),
                branch(2.0, vec![leaf(5.0)]),
                branch(3.0, vec![leaf(5.0)]),
            ],
        );
        let decision = choose_move(&tree, 2, score).unwrap();
        assert_eq!(decision.state.score, 1.0);
        assert_eq!(decision.value, 5.0);
    }

    #[test]
    fn game_states_expand_to_their_successors() {
        let state = GameState::initial(8, 8).unwrap();
        assert!(!state.is_terminal());
        let expanded = state.expand();
        assert_eq!(expanded.len(), 4);
        assert_eq!(expanded, state.successors());

        let finished: GameState = "xxxx/xxxx/xxxx/xxxo x".parse().unwrap();
        assert!(finished.is_terminal());
        assert!(finished.expand().is_empty());
    }

    #[test]
    fn opening_decision_is_deterministic() {
        // The four opening moves lead to congruent positions, so the
        // first one generated must win the tie at any depth.
        let state = GameState::initial(8, 8).unwrap();
        let first = state.play(Coord::new(2, 3)).unwrap();
        for depth in [1, 2, 3] {
            let decision = choose_move(&state, depth, |s: &GameState| {
                crate::eval::evaluate(s, otello_core::Disc::Dark)
            })
            .unwrap();
            assert_eq!(decision.state, first, "depth {depth}");
        }
    }
}
