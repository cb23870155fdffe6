//! Quiescence stage applied at the search horizon.
//!
//! Currently stand-pat only: the static evaluation is clamped into the
//! window and no captures are searched.

use sable_core::Rules;

use crate::eval::{Score, evaluate};

/// Quiescence search of `position` within `(alpha, beta)`.
///
/// Against an infinite window this is exactly [`evaluate`].
///
/// Fail-hard: returns `beta` if the static score already reaches it,
/// otherwise the larger of `alpha` and the static score.
///
/// Stand-pat only. No moves are generated or searched here, so the
/// position is only read.
pub fn quiescence<R: Rules>(position: &R, mut alpha: Score, beta: Score) -> Score {
    let stand_pat = evaluate(position);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    alpha
}
