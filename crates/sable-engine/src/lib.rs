//! Evaluation and fixed-depth negamax search for sable.

pub mod config;
pub mod eval;
pub mod search;

pub use config::{ConfigError, SearchConfig, parse_depth};
pub use eval::{MATE_SCORE, Score, evaluate};
pub use search::negamax::{INF, negamax};
pub use search::quiescence::quiescence;
pub use search::{MinimaxSearcher, SearchResult};
