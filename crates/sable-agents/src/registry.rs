//! Construct players by name.

use std::str::FromStr;

use sable_engine::config::DEFAULT_DEPTH;
use sable_engine::{ConfigError, SearchConfig};
use tracing::debug;

use crate::error::AgentError;
use crate::human::HumanPlayer;
use crate::minimax::MinimaxPlayer;
use crate::player::Player;
use crate::random::RandomPlayer;

/// Names accepted by [`create_agent`].
pub const AGENT_NAMES: [&str; 3] = ["human", "minimax", "random"];

/// The registered player variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Minimax,
    Random,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Human, AgentKind::Minimax, AgentKind::Random];

    pub const fn name(self) -> &'static str {
        match self {
            AgentKind::Human => "human",
            AgentKind::Minimax => "minimax",
            AgentKind::Random => "random",
        }
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(name: &str) -> Result<Self, AgentError> {
        let wanted = name.trim();
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AgentError::UnknownAgent {
                name: wanted.to_string(),
                available: AGENT_NAMES.to_vec(),
            })
    }
}

/// Options shared by every player constructor. Each variant reads the
/// fields it cares about and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentOptions {
    /// Search depth in plies.
    pub depth: u32,
    pub use_alpha_beta: bool,
    pub use_quiescence: bool,
    /// Seed for the random player; entropy from the OS when unset.
    pub seed: Option<u64>,
}

impl AgentOptions {
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        Ok(SearchConfig::new(self.depth)?
            .with_alpha_beta(self.use_alpha_beta)
            .with_quiescence(self.use_quiescence))
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            use_alpha_beta: true,
            use_quiescence: false,
            seed: None,
        }
    }
}

/// Build the player registered under `name` (case-insensitive).
pub fn create_agent(name: &str, options: &AgentOptions) -> Result<Box<dyn Player>, AgentError> {
    let kind: AgentKind = name.parse()?;
    debug!(agent = kind.name(), ?options, "creating player");
    let player: Box<dyn Player> = match kind {
        AgentKind::Human => Box::new(HumanPlayer::stdio()),
        AgentKind::Minimax => Box::new(MinimaxPlayer::new(options.search_config()?)),
        AgentKind::Random => match options.seed {
            Some(seed) => Box::new(RandomPlayer::seeded(seed)),
            None => Box::new(RandomPlayer::new()),
        },
    };
    Ok(player)
}
