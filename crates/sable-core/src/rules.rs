//! The query and mutation surface the search needs from a rules engine.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{Color, PieceKind};

/// Game rules over a single mutable position.
///
/// The search never clones positions. It walks the tree by applying a move,
/// recursing, and undoing it again, so implementations must make
/// [`undo_move`](Rules::undo_move) an exact inverse of the most recent
/// [`apply_move`](Rules::apply_move).
pub trait Rules {
    /// An opaque move token. Only cloned and compared for identity.
    type Move: Clone + PartialEq + fmt::Debug;

    /// Legal moves for the side to move.
    ///
    /// The order is implementation-defined but must not change between
    /// calls on the same position; ties in the search are broken by it.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` in place. `mv` must come from [`legal_moves`](Rules::legal_moves).
    fn apply_move(&mut self, mv: &Self::Move);

    /// Reverse the most recent [`apply_move`](Rules::apply_move).
    fn undo_move(&mut self);

    /// Whether the game has ended (checkmate, stalemate, or another
    /// terminal condition the engine recognizes).
    fn is_game_over(&self) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// The side to move.
    fn side_to_move(&self) -> Color;

    /// Number of pieces of `kind` owned by `color`.
    fn count_pieces(&self, kind: PieceKind, color: Color) -> u32;
}

/// A move applied to a position, undone when the guard is dropped.
///
/// Dereferences to the position so the child can be searched through the
/// guard. Because the undo lives in `Drop`, every way out of the enclosing
/// scope restores the position: falling off the end, `break` on a cutoff,
/// an early `return`, or a panic unwinding through it.
pub struct MoveGuard<'a, R: Rules> {
    position: &'a mut R,
}

impl<'a, R: Rules> MoveGuard<'a, R> {
    /// Apply `mv` to `position` and return the guard that will undo it.
    #[inline]
    pub fn apply(position: &'a mut R, mv: &R::Move) -> Self {
        position.apply_move(mv);
        Self { position }
    }
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;

    #[inline]
    fn deref(&self) -> &R {
        self.position
    }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    #[inline]
    fn deref_mut(&mut self) -> &mut R {
        self.position
    }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    #[inline]
    fn drop(&mut self) {
        self.position.undo_move();
    }
}
