//! Utility types shared across the crate.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`OverflowReason`] - Why a proxy chain resolution was abandoned

mod error;

pub use error::*;
