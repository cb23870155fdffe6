//! Interactive player reading UCI moves from a text stream.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use sable_core::{Board, Move, Rules};
use tracing::warn;

use crate::error::AgentError;
use crate::player::Player;

/// Prompts on `output` and reads moves such as `e2e4` from `input`.
///
/// Unparseable or illegal input is reported and the prompt repeats.
/// End of input, `quit` or `resign` yields no move.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// A player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &'static str {
        "human"
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Move>, AgentError> {
        if board.legal_moves().is_empty() {
            return Ok(None);
        }

        loop {
            write!(self.output, "{} to move: ", board.side_to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim() {
                "" => continue,
                "quit" | "resign" => return Ok(None),
                text => match board.parse_uci(text) {
                    Ok(mv) => return Ok(Some(mv)),
                    Err(e) => {
                        warn!(error = %e, "rejected move input");
                        writeln!(self.output, "{e}")?;
                    }
                },
            }
        }
    }
}
