//! Single-owner heap slots.
//!
//! This module provides:
//! - [`ScopedBox`] - Owns zero or one heap allocation, with explicit copy and move
//! - [`Origin`] - How a box came by its current contents
//! - [`Source`] - Borrow-driven choice between copying and moving

mod scoped;
mod source;

pub use scoped::{ScopedBox, Origin};
pub use source::Source;
