//! Move-choosing players: search-based, random, and human.

pub mod error;
pub mod human;
pub mod minimax;
pub mod player;
pub mod random;
pub mod registry;

pub use error::AgentError;
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use player::Player;
pub use random::RandomPlayer;
pub use registry::{AGENT_NAMES, AgentKind, AgentOptions, create_agent};
