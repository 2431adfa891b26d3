//! Choosing between copy and move by the borrow the caller holds.
//!
//! A read-only borrow cannot empty its box, so asking to acquire from one
//! always copies. Only an exclusive borrow transfers the allocation.

use super::ScopedBox;

/// Where a new [`ScopedBox`] takes its contents from.
pub enum Source<'a, T> {
    /// Read-only source: contents are deep-copied.
    Shared(&'a ScopedBox<T>),
    /// Exclusive source: the allocation is transferred and the source emptied.
    Exclusive(&'a mut ScopedBox<T>),
}

impl<'a, T> From<&'a ScopedBox<T>> for Source<'a, T> {
    fn from(source: &'a ScopedBox<T>) -> Self {
        Source::Shared(source)
    }
}

impl<'a, T> From<&'a mut ScopedBox<T>> for Source<'a, T> {
    fn from(source: &'a mut ScopedBox<T>) -> Self {
        Source::Exclusive(source)
    }
}

impl<T: Clone> ScopedBox<T> {
    /// Build a box from `source`, copying or moving depending on the borrow.
    pub fn acquire<'a>(source: impl Into<Source<'a, T>>) -> Self
    where
        T: 'a,
    {
        match source.into() {
            Source::Shared(from) => from.copy(),
            Source::Exclusive(from) => from.take(),
        }
    }
}
