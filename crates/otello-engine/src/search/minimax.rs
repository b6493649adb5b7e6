//! Fail-hard alpha-beta minimax over abstract game trees.

use crate::search::GameTree;

/// Whose interests the current ply serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Role {
    Max,
    Min,
}

impl Role {
    /// The role of the responding player one ply down.
    fn flip(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// Starting value that any real child value improves on.
    fn worst(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }
}

/// Work counters for one completed root decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes expanded.
    pub nodes: u64,
    /// Positions handed to the evaluation function.
    pub leaves: u64,
}

/// Minimax value of `node` for `role`, searched to `depth` plies with
/// fail-hard alpha-beta bounds.
///
/// Terminal nodes and nodes at depth 0 go straight to `evaluate`.
/// Interior nodes fold their children through max or min, checking the
/// opposing bound before tightening their own: once the running value
/// reaches beta (maximizing) or alpha (minimizing), no remaining
/// sibling can change what the ancestor picks, so the rest of the
/// children are dropped unexpanded. The returned value never escapes
/// the [alpha, beta] window by more than the running extreme itself.
pub(super) fn value<T, F>(
    node: &T,
    depth: u8,
    role: Role,
    mut alpha: f64,
    mut beta: f64,
    evaluate: &mut F,
    stats: &mut SearchStats,
) -> f64
where
    T: GameTree,
    F: FnMut(&T) -> f64,
{
    if depth == 0 || node.is_terminal() {
        stats.leaves += 1;
        return evaluate(node);
    }

    stats.nodes += 1;
    let mut running = role.worst();
    for child in node.expand() {
        let reply = value(&child, depth - 1, role.flip(), alpha, beta, evaluate, stats);
        match role {
            Role::Max => {
                running = running.max(reply);
                if running >= beta {
                    break;
                }
                alpha = alpha.max(running);
            }
            Role::Min => {
                running = running.min(reply);
                if running <= alpha {
                    break;
                }
                beta = beta.min(running);
            }
        }
    }
    running
}

// -------------------------------------------------------------- Tests
