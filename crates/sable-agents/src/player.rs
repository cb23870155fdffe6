//! The player abstraction.

use sable_core::{Board, Move};

use crate::error::AgentError;

/// Anything that can pick a move for the side to move.
///
/// Implementations may mutate `board` while deciding but must hand it back
/// in the state they received it. `Ok(None)` means the player has no move
/// to offer: no legal moves, or a human who resigned or closed input.
pub trait Player {
    /// Short identifier, matching the registry name.
    fn name(&self) -> &'static str;

    /// Choose a move for the side to move on `board`.
    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Move>, AgentError>;
}
