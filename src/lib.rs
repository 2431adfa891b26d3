//! # scoped-proxy
//!
//! Two small building blocks for ownership and indirection:
//!
//! - [`owner`] - [`ScopedBox`], a single-owner heap slot where copying deep-clones
//!   the value and moving transfers the allocation, leaving the source empty
//! - [`proxy`] - [`IndirectionChain`], which walks nested wrapper layers down to
//!   a terminal address under a step bound
//! - [`util`] - Errors shared by both
//!
//! ## Example
//!
//! ```
//! use scoped_proxy::prelude::*;
//!
//! let mut held = ScopedBox::new(10);
//! let copied = held.copy();
//! let moved = held.take();
//!
//! assert_eq!(copied.access(), Ok(&10));
//! assert_eq!(moved.access(), Ok(&10));
//! assert_eq!(held.access(), Err(Error::NullDereference));
//! ```

pub mod util;
pub mod owner;
pub mod proxy;

// Re-export commonly used types
pub use util::{Error, OverflowReason, Result};
pub use owner::{ScopedBox, Origin, Source};
pub use proxy::{IndirectionChain, ChainConfig, Node, Step, Resolved};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, OverflowReason, Result};
    pub use crate::owner::{ScopedBox, Origin, Source};
    pub use crate::proxy::{IndirectionChain, ChainConfig, Node, Step, Resolved};
}
