//! Search configuration.

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 2;

/// Errors from building a [`SearchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The root always searches at least one ply.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    /// A depth given as text is negative or not a number.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The text that failed to parse.
        value: String,
    },
}

/// Options fixed when a searcher is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u32,
    /// Prune with an alpha-beta window.
    pub use_alpha_beta: bool,
    /// Hand depth-0 leaves to the stand-pat quiescence stage.
    pub use_quiescence: bool,
}

impl SearchConfig {
    /// Alpha-beta on, quiescence off, searching `depth` plies.
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self {
            depth,
            use_alpha_beta: true,
            use_quiescence: false,
        })
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.use_alpha_beta = enabled;
        self
    }

    pub fn with_quiescence(mut self, enabled: bool) -> Self {
        self.use_quiescence = enabled;
        self
    }

    /// Search depth in plies. Always at least 1.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            use_alpha_beta: true,
            use_quiescence: false,
        }
    }
}

/// Parse a root search depth from text.
///
/// Rejects negative numbers, non-numbers and zero.
pub fn parse_depth(value: &str) -> Result<u32, ConfigError> {
    let depth: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidDepth {
        value: value.to_string(),
    })?;
    SearchConfig::new(depth).map(|config| config.depth())
}
