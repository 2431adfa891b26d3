//! Bounded resolution of nested proxies.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{ChainConfig, Node, Step};
use crate::util::{Error, OverflowReason, Result};

/// A terminal address and how many steps it took to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<A> {
    /// Terminal address.
    pub address: A,
    /// Number of [`Node::step`] calls, including the terminal one.
    pub steps: usize,
}

/// Resolves chains of [`Node`]s down to their terminal address.
///
/// Holds no per-resolution state, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndirectionChain {
    config: ChainConfig,
}

impl IndirectionChain {
    /// Create a resolver with the default bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom bound.
    pub fn with_config(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Step through `start` until a terminal address comes out.
    ///
    /// Fails with [`Error::ProxyChainOverflow`] once more than
    /// `max_depth` forwarding steps were taken, or as soon as a layer reports
    /// an identity already seen in this resolution.
    pub fn resolve<N: Node>(&self, start: N) -> Result<Resolved<N::Address>> {
        let limit = self.config.max_depth;
        let mut visited: SmallVec<[usize; 16]> = SmallVec::new();
        let mut current = start;
        let mut steps = 0usize;

        loop {
            if let Some(id) = current.identity() {
                if visited.contains(&id) {
                    debug!(steps, id, "proxy chain revisited a node");
                    return Err(Error::ProxyChainOverflow {
                        steps,
                        limit,
                        reason: OverflowReason::Revisited,
                    });
                }
                visited.push(id);
            }

            steps += 1;
            match current.step() {
                Step::Terminal(address) => {
                    trace!(steps, "proxy chain resolved");
                    return Ok(Resolved { address, steps });
                }
                Step::Forward(next) => {
                    // `steps` equals the number of forwards taken so far
                    if steps > limit {
                        debug!(steps, limit, "proxy chain exceeded depth limit");
                        return Err(Error::ProxyChainOverflow {
                            steps,
                            limit,
                            reason: OverflowReason::DepthLimit,
                        });
                    }
                    trace!(steps, "proxy chain forward");
                    current = next;
                }
            }
        }
    }

    /// Resolve `start` and apply `member` to the terminal address.
    pub fn access<N, R, F>(&self, start: N, member: F) -> Result<R>
    where
        N: Node,
        F: FnOnce(N::Address) -> R,
    {
        let resolved = self.resolve(start)?;
        Ok(member(resolved.address))
    }
}

/// Resolve `start` with the default bound.
pub fn resolve<N: Node>(start: N) -> Result<N::Address> {
    IndirectionChain::new().resolve(start).map(|r| r.address)
}
