//! Game-tree search and root move selection.

pub mod negamax;
pub mod quiescence;

use sable_core::{MoveGuard, Rules};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::eval::{Score, evaluate};
use negamax::{INF, SearchContext};

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move, or `None` when the side to move has no legal moves.
    pub best_move: Option<M>,
    /// Score of `best_move` for the side to move. With no legal moves,
    /// the static evaluation of the position.
    pub score: Score,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Fixed-depth negamax move selector.
///
/// Holds only its configuration, so one searcher can be reused across
/// positions and games.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSearcher {
    config: SearchConfig,
}

impl MinimaxSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the best move for the side to move, or `None` if there are no
    /// legal moves. Ties go to the earliest move in generation order.
    pub fn choose_move<R: Rules>(&self, position: &mut R) -> Option<R::Move> {
        self.search(position).best_move
    }

    /// Search every root move and return the best with its score.
    ///
    /// `position` is restored to its original state before returning.
    pub fn search<R: Rules>(&self, position: &mut R) -> SearchResult<R::Move> {
        let moves = position.legal_moves();
        if moves.is_empty() {
            let score = evaluate(position);
            debug!(score, "no legal moves at root");
            return SearchResult {
                best_move: None,
                score,
                nodes: 0,
            };
        }

        let mut ctx = SearchContext::new(self.config.use_alpha_beta, self.config.use_quiescence);
        let child_depth = self.config.depth() - 1;

        let mut best_move = None;
        let mut best_value = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mv in moves {
            let value = {
                let mut child = MoveGuard::apply(&mut *position, &mv);
                -ctx.negamax(&mut *child, child_depth, -beta, -alpha)
            };
            debug!(mv = ?mv, value, "root move");

            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }

            if self.config.use_alpha_beta && value > alpha {
                alpha = value;
            }
        }

        info!(
            best = ?best_move,
            score = best_value,
            nodes = ctx.nodes,
            depth = self.config.depth(),
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_value,
            nodes: ctx.nodes,
        }
    }
}
