//! `ScopedBox<T>`: an owning slot that is either full or explicitly empty.
//!
//! Copying clones the pointee into a fresh allocation. Moving hands the
//! existing allocation over and leaves the source empty, so the allocation is
//! released exactly once, by whichever box ends up holding it.

use std::fmt;
use std::ptr::NonNull;

use tracing::trace;

use crate::util::{Error, Result};

/// How a [`ScopedBox`] acquired its current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Nothing held (never filled, moved-from or released).
    #[default]
    Empty,
    /// Took ownership of a caller-supplied allocation.
    Wrapped,
    /// Holds a deep copy of another box's value.
    Copied,
    /// Holds an allocation transferred from another box.
    Moved,
}

/// Exclusive owner of at most one heap-resident `T`.
pub struct ScopedBox<T> {
    slot: Option<Box<T>>,
    origin: Origin,
}

impl<T> ScopedBox<T> {
    /// Create an empty box.
    pub const fn empty() -> Self {
        Self {
            slot: None,
            origin: Origin::Empty,
        }
    }

    /// Take sole ownership of a caller-allocated value.
    pub fn wrap(address: Box<T>) -> Self {
        trace!(address = ?NonNull::from(&*address), "wrap");
        Self {
            slot: Some(address),
            origin: Origin::Wrapped,
        }
    }

    /// Allocate `value` on the heap and own it.
    pub fn new(value: T) -> Self {
        Self::wrap(Box::new(value))
    }

    /// Transfer the held allocation (if any) into a new box.
    ///
    /// `self` is left empty. Nothing is allocated or freed; the returned box
    /// reports the same [`address`](Self::address) `self` had.
    pub fn take(&mut self) -> Self {
        let slot = self.slot.take();
        self.origin = Origin::Empty;
        trace!(address = ?slot.as_deref().map(NonNull::from), "move");
        let origin = if slot.is_some() {
            Origin::Moved
        } else {
            Origin::Empty
        };
        Self { slot, origin }
    }

    /// Borrow the held value.
    ///
    /// Fails with [`Error::NullDereference`] when the box is empty.
    #[inline]
    pub fn access(&self) -> Result<&T> {
        self.slot.as_deref().ok_or(Error::NullDereference)
    }

    /// Mutably borrow the held value.
    #[inline]
    pub fn access_mut(&mut self) -> Result<&mut T> {
        self.slot.as_deref_mut().ok_or(Error::NullDereference)
    }

    /// Check whether the box holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// How the current contents were acquired.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Address of the held allocation, for identity comparisons only.
    #[inline]
    pub fn address(&self) -> Option<NonNull<T>> {
        self.slot.as_deref().map(NonNull::from)
    }

    /// Free the held allocation now and leave the box empty.
    pub fn release(&mut self) {
        if let Some(held) = self.slot.take() {
            trace!(address = ?NonNull::from(&*held), "release");
            drop(held);
        }
        self.origin = Origin::Empty;
    }

    /// Install `address` as the new contents.
    ///
    /// The previous contents come back as their own box so they are still
    /// released exactly once.
    pub fn replace(&mut self, address: Box<T>) -> Self {
        let previous = self.take();
        *self = Self::wrap(address);
        previous
    }

    /// Give the allocation back to the caller without freeing it.
    pub fn into_inner(mut self) -> Option<Box<T>> {
        self.origin = Origin::Empty;
        self.slot.take()
    }
}

impl<T: Clone> ScopedBox<T> {
    /// Deep-copy the held value into a new allocation.
    ///
    /// An empty source yields an empty box without allocating. `self` keeps
    /// its own allocation.
    pub fn copy(&self) -> Self {
        match self.slot.as_deref() {
            Some(value) => {
                let slot = Box::new(value.clone());
                trace!(
                    from = ?NonNull::from(value),
                    to = ?NonNull::from(&*slot),
                    "copy"
                );
                Self {
                    slot: Some(slot),
                    origin: Origin::Copied,
                }
            }
            None => Self::empty(),
        }
    }
}

impl<T> Drop for ScopedBox<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Clone> Clone for ScopedBox<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Default for ScopedBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<T>> for ScopedBox<T> {
    fn from(address: Box<T>) -> Self {
        Self::wrap(address)
    }
}

impl<T> From<T> for ScopedBox<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ScopedBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.as_deref() {
            Some(value) => f.debug_tuple("ScopedBox").field(value).finish(),
            None => f.write_str("ScopedBox(<empty>)"),
        }
    }
}
