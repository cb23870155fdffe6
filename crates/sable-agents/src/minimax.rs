//! Search-based player.

use sable_core::{Board, Move};
use sable_engine::{MinimaxSearcher, SearchConfig};

use crate::error::AgentError;
use crate::player::Player;

/// Plays the move chosen by a fixed-depth negamax search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPlayer {
    searcher: MinimaxSearcher,
}

impl MinimaxPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: MinimaxSearcher::new(config),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Move>, AgentError> {
        Ok(self.searcher.choose_move(board))
    }
}
