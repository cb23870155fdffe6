//! Static evaluation.
//!
//! Scores are centipawns from the perspective of the side to move:
//! positive means the side to move is ahead.

pub mod material;

use sable_core::Rules;

/// Centipawn score, always relative to the side to move.
pub type Score = i32;

/// Score of being checkmated, negated. A position where the side to move
/// is mated evaluates to exactly `-MATE_SCORE`.
pub const MATE_SCORE: Score = 100_000;

/// Evaluate `position` for the side to move.
///
/// Checkmate is the only terminal state with its own score. Stalemate and
/// other draws fall through to plain material balance.
pub fn evaluate<R: Rules>(position: &R) -> Score {
    if position.is_checkmate() {
        return -MATE_SCORE;
    }
    material::balance(position, position.side_to_move())
}
