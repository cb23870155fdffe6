//! Error types for position setup and move input.

/// Errors that occur when building a [`Board`](crate::Board) from FEN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The text is not syntactically valid FEN.
    #[error("malformed FEN \"{fen}\": {reason}")]
    Malformed {
        /// The FEN string as given.
        fen: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The FEN parses but does not describe a playable position.
    #[error("illegal position \"{fen}\": {reason}")]
    IllegalPosition {
        /// The FEN string as given.
        fen: String,
        /// Setup validation diagnostic.
        reason: String,
    },
}

/// Errors from reading a move in UCI notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The text is not a UCI move such as `e2e4` or `e7e8q`.
    #[error("malformed move: {uci}")]
    Malformed {
        /// The move text as given.
        uci: String,
    },
    /// Well-formed, but not legal in the current position.
    #[error("illegal move: {uci}")]
    Illegal {
        /// The move text as given.
        uci: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError};

    #[test]
    fn fen_error_display() {
        let err = FenError::Malformed {
            fen: "xyz".to_string(),
            reason: "invalid board".to_string(),
        };
        assert_eq!(err.to_string(), "malformed FEN \"xyz\": invalid board");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Illegal {
            uci: "e2e5".to_string(),
        };
        assert_eq!(err.to_string(), "illegal move: e2e5");
    }
}
