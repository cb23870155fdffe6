//! Player construction and input errors.

use sable_engine::ConfigError;

/// Errors that can occur while building or running a player.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// No player is registered under this name.
    #[error("unknown agent '{name}', available agents: {}", .available.join(", "))]
    UnknownAgent {
        /// The requested name.
        name: String,
        /// Registered names.
        available: Vec<&'static str>,
    },

    /// The search options are invalid.
    #[error("invalid search configuration: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// Reading or prompting for a human move failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use sable_engine::ConfigError;

    use super::AgentError;

    #[test]
    fn unknown_agent_lists_names() {
        let err = AgentError::UnknownAgent {
            name: "mcts".to_string(),
            available: vec!["human", "minimax", "random"],
        };
        assert_eq!(
            err.to_string(),
            "unknown agent 'mcts', available agents: human, minimax, random"
        );
    }

    #[test]
    fn config_error_converts() {
        let err: AgentError = ConfigError::ZeroDepth.into();
        assert!(matches!(err, AgentError::Config { .. }));
    }
}
