//! Allocation and release counters.
//!
//! A [`Tally`] hands out [`Tracked`] values. Every construction or clone of a
//! tracked value counts as one allocation, every drop as one release, so a
//! test can assert that an ownership transfer neither duplicated nor leaked
//! anything.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    allocated: AtomicUsize,
    released: AtomicUsize,
}

/// Shared counter handle. Clones observe the same counts.
#[derive(Clone, Default)]
pub struct Tally {
    counters: Arc<Counters>,
}

impl Tally {
    /// Create a fresh tally with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value`, counting one allocation.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        self.counters.allocated.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            tally: self.clone(),
        }
    }

    /// Number of tracked values created so far (including clones).
    #[inline]
    pub fn allocated(&self) -> usize {
        self.counters.allocated.load(Ordering::Relaxed)
    }

    /// Number of tracked values dropped so far.
    #[inline]
    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::Relaxed)
    }

    /// Values allocated but not yet released.
    #[inline]
    pub fn live(&self) -> usize {
        self.allocated().saturating_sub(self.released())
    }
}

impl fmt::Debug for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tally")
            .field("allocated", &self.allocated())
            .field("released", &self.released())
            .finish()
    }
}

/// A value whose lifetime is reported to a [`Tally`].
pub struct Tracked<V> {
    value: V,
    tally: Tally,
}

impl<V> Tracked<V> {
    /// The tally this value reports to.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        self.tally.track(self.value.clone())
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.tally.counters.released.fetch_add(1, Ordering::Relaxed);
    }
}

impl<V> Deref for Tracked<V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V> DerefMut for Tracked<V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
