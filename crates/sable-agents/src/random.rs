//! Uniform random player.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use sable_core::{Board, Move, Rules};

use crate::error::AgentError;
use crate::player::Player;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// A player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible player: equal seeds give equal move sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Move>, AgentError> {
        Ok(board.legal_moves().choose(&mut self.rng).cloned())
    }
}
