//! Core chess types and the rules-engine seam used by the search.
//!
//! Move generation, make/unmake and terminal detection are provided by
//! `shakmaty`; the rest of the workspace only talks to it through the
//! [`Rules`] trait.

mod board;
mod color;
mod error;
mod piece_kind;
mod rules;

pub use board::{Board, STARTING_FEN};
pub use color::Color;
pub use error::{FenError, MoveError};
pub use piece_kind::PieceKind;
pub use rules::{MoveGuard, Rules};

/// Move type produced by [`Board`].
pub use shakmaty::Move;
