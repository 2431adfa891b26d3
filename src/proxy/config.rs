//! Resolution limits.

use crate::util::{Error, Result};

/// Default number of forwarding steps allowed per resolution.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable overriding [`ChainConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "SCOPED_PROXY_MAX_DEPTH";

/// Limits applied to every resolution of an [`IndirectionChain`](super::IndirectionChain).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Maximum number of forwarding steps before giving up.
    pub max_depth: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ChainConfig {
    /// Create a validated config.
    pub fn new(max_depth: usize) -> Result<Self> {
        let config = Self { max_depth };
        config.validate()?;
        Ok(config)
    }

    /// Read the config from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var(MAX_DEPTH_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse a `max_depth` override.
    pub fn parse(raw: &str) -> Result<Self> {
        let max_depth = raw.trim().parse::<usize>().map_err(|e| {
            Error::invalid_config(format!("{MAX_DEPTH_ENV}={raw:?}: {e}"))
        })?;
        Self::new(max_depth)
    }

    /// Reject limits that could never resolve a forwarding chain.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::invalid_config("max_depth must be at least 1"));
        }
        Ok(())
    }
}
