//! Error types for scoped-proxy.

use std::fmt;
use thiserror::Error;

/// Why an indirection chain was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowReason {
    /// The step counter passed the configured bound.
    DepthLimit,
    /// A node reported an identity already seen in the same resolution.
    Revisited,
}

impl fmt::Display for OverflowReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimit => f.write_str("depth limit exceeded"),
            Self::Revisited => f.write_str("node revisited"),
        }
    }
}

/// Main error type for scoped-proxy operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value access on an empty (never filled, moved-from or released) box
    #[error("Null dereference: box is empty")]
    NullDereference,

    /// Proxy chain did not reach a terminal address
    #[error("Proxy chain overflow after {steps} steps (limit {limit}): {reason}")]
    ProxyChainOverflow {
        steps: usize,
        limit: usize,
        reason: OverflowReason,
    },

    /// Unusable chain configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for either kind of contract violation by the caller.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::NullDereference | Self::ProxyChainOverflow { .. })
    }
}

/// Result type alias for scoped-proxy operations.
pub type Result<T> = std::result::Result<T, Error>;
