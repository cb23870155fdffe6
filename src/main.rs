use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sable_agents::{AgentOptions, create_agent};
use sable_core::Board;
use sable_engine::parse_depth;
use sable_engine::config::DEFAULT_DEPTH;

/// Pick a move for the side to move in a chess position.
#[derive(Debug, Parser)]
#[command(name = "sable", version)]
struct Args {
    /// Player to ask: minimax, random or human.
    #[arg(long, default_value = "minimax")]
    agent: String,

    /// Search depth in plies.
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = parse_depth)]
    depth: u32,

    /// Search full-width instead of pruning with alpha-beta.
    #[arg(long)]
    no_alpha_beta: bool,

    /// Evaluate horizon nodes through the quiescence stage.
    #[arg(long)]
    quiescence: bool,

    /// Seed for the random player.
    #[arg(long)]
    seed: Option<u64>,

    /// Position in FEN; the starting position when omitted.
    fen: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(agent = %args.agent, depth = args.depth, "sable starting");

    let mut board = match args.fen.as_deref() {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::starting_position(),
    };

    let options = AgentOptions {
        depth: args.depth,
        use_alpha_beta: !args.no_alpha_beta,
        use_quiescence: args.quiescence,
        seed: args.seed,
    };
    let mut player = create_agent(&args.agent, &options)?;

    match player.choose_move(&mut board)? {
        Some(mv) => println!("bestmove {}", board.to_uci(&mv)),
        None => println!("bestmove 0000"),
    }
    Ok(())
}
