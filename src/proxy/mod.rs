//! Transparent multi-level indirection.
//!
//! This module provides:
//! - [`Node`] / [`Step`] - One layer of a proxy chain and the outcome of resolving it
//! - [`IndirectionChain`] - Drives a chain to its terminal address under a step bound
//! - [`ChainConfig`] - The bound, with defaults and environment override
//! - [`Resolved`] - A terminal address plus the number of steps it took

mod node;
mod config;
mod chain;

pub use node::{Node, Step};
pub use config::{ChainConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV};
pub use chain::{IndirectionChain, Resolved, resolve};
