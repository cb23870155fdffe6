//! A mutable chess position backed by `shakmaty`, with an undo stack.

use std::num::NonZeroU32;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position, Setup};
use tracing::warn;

use crate::error::{FenError, MoveError};
use crate::rules::Rules;
use crate::{Color, PieceKind};

/// Halfmove clock at which the game ends under the 75-move rule.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game.
const FIVEFOLD: usize = 5;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Saved state for one applied move.
#[derive(Debug, Clone)]
struct Undo {
    previous: Chess,
    played: Move,
}

/// A chess position that can be played forward and taken back.
///
/// `shakmaty` positions are immutable values, so undo is implemented by
/// pushing the pre-move position onto a stack.
#[derive(Debug, Clone)]
pub struct Board {
    position: Chess,
    undo: Vec<Undo>,
}

impl Board {
    /// The standard starting position.
    pub fn starting_position() -> Board {
        Board {
            position: Chess::default(),
            undo: Vec::new(),
        }
    }

    /// Parse a position from FEN.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parsed = fen.trim().parse::<Fen>().map_err(|e| FenError::Malformed {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| FenError::IllegalPosition {
                    fen: fen.to_string(),
                    reason: e.to_string(),
                })?;
        Ok(Board {
            position,
            undo: Vec::new(),
        })
    }

    /// The underlying `shakmaty` position.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of moves applied since construction and not yet undone.
    pub fn ply_count(&self) -> usize {
        self.undo.len()
    }

    /// Moves applied since construction, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = &Move> {
        self.undo.iter().map(|u| &u.played)
    }

    /// Whether `mv` captures a piece (including en passant).
    pub fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    /// Whether the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// Whether the 75-move rule has ended the game.
    pub fn is_seventy_five_moves(&self) -> bool {
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    /// Whether the current position has occurred five times.
    ///
    /// Only positions since the last capture or pawn move can repeat, so
    /// the scan covers at most `halfmoves` entries of the undo stack.
    pub fn is_fivefold_repetition(&self) -> bool {
        let reversible = self.position.halfmoves() as usize;
        if reversible < 4 * (FIVEFOLD - 1) {
            return false;
        }
        let current = repetition_key(&self.position);
        let earlier = self
            .undo
            .iter()
            .rev()
            .take(reversible)
            .filter(|u| repetition_key(&u.previous) == current)
            .count();
        earlier + 1 >= FIVEFOLD
    }

    /// Render `mv` in UCI notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Parse a UCI move and check that it is legal here.
    pub fn parse_uci(&self, text: &str) -> Result<Move, MoveError> {
        let uci: UciMove = text.trim().parse().map_err(|_| MoveError::Malformed {
            uci: text.trim().to_string(),
        })?;
        uci.to_move(&self.position).map_err(|_| MoveError::Illegal {
            uci: text.trim().to_string(),
        })
    }
}

impl Rules for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply_move(&mut self, mv: &Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(mv.clone());
        self.undo.push(Undo {
            previous,
            played: mv.clone(),
        });
    }

    fn undo_move(&mut self) {
        match self.undo.pop() {
            Some(undo) => self.position = undo.previous,
            None => warn!("undo requested with no applied moves"),
        }
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over() || self.is_seventy_five_moves() || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn side_to_move(&self) -> Color {
        self.position.turn().into()
    }

    fn count_pieces(&self, kind: PieceKind, color: Color) -> u32 {
        let board = self.position.board();
        (board.by_role(kind.into()) & board.by_color(color.into())).count() as u32
    }
}

/// Position identity for repetition: everything but the move counters.
fn repetition_key(position: &Chess) -> Setup {
    let mut setup = position.to_setup(EnPassantMode::Legal);
    setup.halfmoves = 0;
    setup.fullmoves = NonZeroU32::MIN;
    setup
}

/// Two boards are equal when their full setups (placement, side to move,
/// castling rights, en passant square, move counters) and undo histories
/// match.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.position.to_setup(EnPassantMode::Always) == other.position.to_setup(EnPassantMode::Always)
            && self.moves_played().eq(other.moves_played())
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        Board::from_fen(fen)
    }
}

#[cfg(test)]
mod tests {
    use shakmaty::Position;

    use super::{Board, STARTING_FEN};
    use crate::rules::Rules;
    use crate::{Color, FenError, MoveError, PieceKind};

    #[test]
    fn starting_position_matches_starting_fen() {
        let parsed: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::starting_position();
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.side_to_move(), Color::White);
        assert!(!board.is_game_over());
    }

    #[test]
    fn counts_starting_material() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert_eq!(board.count_pieces(PieceKind::Pawn, color), 8);
            assert_eq!(board.count_pieces(PieceKind::Knight, color), 2);
            assert_eq!(board.count_pieces(PieceKind::Bishop, color), 2);
            assert_eq!(board.count_pieces(PieceKind::Rook, color), 2);
            assert_eq!(board.count_pieces(PieceKind::Queen, color), 1);
            assert_eq!(board.count_pieces(PieceKind::King, color), 1);
        }
    }

    #[test]
    fn apply_then_undo_restores() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let mv = board.parse_uci("e2e4").unwrap();
        board.apply_move(&mv);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.ply_count(), 1);
        board.undo_move();
        assert_eq!(board, before);
    }

    #[test]
    fn undo_on_fresh_board_is_a_no_op() {
        let mut board = Board::starting_position();
        board.undo_move();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn history_participates_in_equality() {
        // Same placement reached by a knight shuffle, but with history.
        let mut shuffled = Board::starting_position();
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = shuffled.parse_uci(uci).unwrap();
            shuffled.apply_move(&mv);
        }
        assert_eq!(shuffled.position().board(), Board::starting_position().position().board());
        assert_ne!(shuffled, Board::starting_position());
    }

    #[test]
    fn detects_checkmate() {
        let board: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(board.is_checkmate());
        assert!(board.is_game_over());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn detects_stalemate() {
        let board: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(!board.is_checkmate());
        assert!(board.is_stalemate());
        assert!(board.is_game_over());
    }

    #[test]
    fn uci_roundtrip() {
        let board = Board::starting_position();
        let mv = board.parse_uci("g1f3").unwrap();
        assert_eq!(board.to_uci(&mv), "g1f3");
    }

    #[test]
    fn rejects_illegal_and_malformed_moves() {
        let board = Board::starting_position();
        assert!(matches!(board.parse_uci("e2e5"), Err(MoveError::Illegal { .. })));
        assert!(matches!(board.parse_uci("hello"), Err(MoveError::Malformed { .. })));
    }

    #[test]
    fn rejects_bad_fen() {
        assert!(matches!(
            Board::from_fen("not a fen"),
            Err(FenError::Malformed { .. })
        ));
        // No kings at all.
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::IllegalPosition { .. })
        ));
    }

    #[test]
    fn reports_captures() {
        let board: Board = "7k/8/8/8/8/2p5/8/K1Q5 w - - 0 1".parse().unwrap();
        let capture = board.parse_uci("c1c3").unwrap();
        let quiet = board.parse_uci("c1c2").unwrap();
        assert!(board.is_capture(&capture));
        assert!(!board.is_capture(&quiet));
    }

    #[test]
    fn castling_rights_participate_in_equality() {
        let all: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let none: Board = "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1".parse().unwrap();
        let white_only: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        assert_ne!(all, none);
        assert_ne!(all, white_only);
        assert_eq!(all, all.clone());
    }

    #[test]
    fn en_passant_square_participates_in_equality() {
        let with_ep: Board = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
            .parse()
            .unwrap();
        let without_ep: Board = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
            .parse()
            .unwrap();
        assert_ne!(with_ep, without_ep);
    }

    #[test]
    fn castling_undo_restores_rights() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let before = board.clone();
        let castle = board.parse_uci("e1g1").unwrap();
        board.apply_move(&castle);
        board.undo_move();
        assert_eq!(board, before);
    }

    #[test]
    fn seventy_five_move_rule_ends_game() {
        let board: Board = "4k3/8/8/8/8/8/3Q4/4K3 w - - 150 120".parse().unwrap();
        assert!(!board.legal_moves().is_empty());
        assert!(board.is_seventy_five_moves());
        assert!(board.is_game_over());

        let earlier: Board = "4k3/8/8/8/8/8/3Q4/4K3 w - - 149 120".parse().unwrap();
        assert!(!earlier.is_game_over());
    }

    #[test]
    fn fivefold_repetition_ends_game() {
        let mut board = Board::starting_position();
        for cycle in 0..4 {
            assert!(!board.is_game_over(), "game over too early, cycle {cycle}");
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                let mv = board.parse_uci(uci).unwrap();
                board.apply_move(&mv);
            }
        }
        assert!(board.is_fivefold_repetition());
        assert!(board.is_game_over());

        board.undo_move();
        assert!(!board.is_fivefold_repetition());
    }
}
