//! Fixed-depth negamax with optional alpha-beta pruning.

use sable_core::{MoveGuard, Rules};
use tracing::trace;

use crate::eval::{Score, evaluate};
use crate::search::quiescence::quiescence;

/// Window edge larger than any reachable score, including mate.
///
/// Kept well inside `i32` so it can be negated freely.
pub const INF: Score = 1_000_000;

/// Negamax search of `position` to `depth` plies.
///
/// Returns the score for the side to move at `position`. The position is
/// mutated during the search and restored before returning.
pub fn negamax<R: Rules>(
    position: &mut R,
    depth: u32,
    alpha: Score,
    beta: Score,
    use_alpha_beta: bool,
    use_quiescence: bool,
) -> Score {
    let mut ctx = SearchContext::new(use_alpha_beta, use_quiescence);
    ctx.negamax(position, depth, alpha, beta)
}

/// Per-invocation search state threaded through the recursion.
#[derive(Debug, Clone)]
pub(crate) struct SearchContext {
    /// Nodes visited, including quiescence nodes.
    pub nodes: u64,
    use_alpha_beta: bool,
    use_quiescence: bool,
}

impl SearchContext {
    pub fn new(use_alpha_beta: bool, use_quiescence: bool) -> Self {
        Self {
            nodes: 0,
            use_alpha_beta,
            use_quiescence,
        }
    }

    pub fn negamax<R: Rules>(
        &mut self,
        position: &mut R,
        depth: u32,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;

        // Horizon or terminal node
        let game_over = position.is_game_over();
        if depth == 0 || game_over {
            if self.use_quiescence && !game_over {
                return self.quiescence(position, alpha, beta);
            }
            return evaluate(position);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return evaluate(position);
        }

        let mut best = -INF;
        for mv in &moves {
            let value = {
                let mut child = MoveGuard::apply(&mut *position, mv);
                -self.negamax(&mut *child, depth - 1, -beta, -alpha)
            };

            best = best.max(value);

            if self.use_alpha_beta {
                alpha = alpha.max(value);
                if alpha >= beta {
                    trace!(depth, alpha, beta, "beta cutoff");
                    break;
                }
            }
        }

        best
    }

    pub fn quiescence<R: Rules>(&mut self, position: &R, alpha: Score, beta: Score) -> Score {
        self.nodes += 1;
        quiescence(position, alpha, beta)
    }
}
