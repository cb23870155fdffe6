//! Material counting.

use sable_core::{Color, PieceKind, Rules};

use crate::eval::Score;

/// Centipawn value of each piece kind, indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Knight | 320   |
/// | Bishop | 330   |
/// | Rook   | 500   |
/// | Queen  | 900   |
/// | King   | 0     |
///
/// The king carries no material value; losing it is handled by the mate
/// score instead.
pub const PIECE_VALUES: [Score; PieceKind::COUNT] = [
    100, // Pawn
    320, // Knight
    330, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// Total material owned by `color`.
pub fn material<R: Rules>(position: &R, color: Color) -> Score {
    PieceKind::ALL
        .iter()
        .map(|&kind| PIECE_VALUES[kind.index()] * position.count_pieces(kind, color) as Score)
        .sum()
}

/// Material of `perspective` minus material of its opponent.
pub fn balance<R: Rules>(position: &R, perspective: Color) -> Score {
    let mut score = 0;
    for kind in PieceKind::ALL {
        let ours = position.count_pieces(kind, perspective) as Score;
        let theirs = position.count_pieces(kind, !perspective) as Score;
        score += PIECE_VALUES[kind.index()] * (ours - theirs);
    }
    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use sable_core::{Board, Color, PieceKind};

    use super::{PIECE_VALUES, balance, material};

    #[test]
    fn starting_material_per_side() {
        let board = Board::starting_position();
        // 8*100 + 2*320 + 2*330 + 2*500 + 900
        assert_eq!(material(&board, Color::White), 4000);
        assert_eq!(material(&board, Color::Black), 4000);
        assert_eq!(balance(&board, Color::White), 0);
    }

    #[test]
    fn missing_black_queen() {
        let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(balance(&board, Color::White), PIECE_VALUES[PieceKind::Queen.index()]);
        assert_eq!(balance(&board, Color::Black), -PIECE_VALUES[PieceKind::Queen.index()]);
    }

    #[test]
    fn extra_white_rook() {
        let board: Board = "1nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Qk - 0 1"
            .parse()
            .unwrap();
        assert_eq!(balance(&board, Color::White), 500);
    }

    #[test]
    fn king_is_worth_nothing() {
        assert_eq!(PIECE_VALUES[PieceKind::King.index()], 0);
        let bare_kings: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(material(&bare_kings, Color::White), 0);
    }
}
