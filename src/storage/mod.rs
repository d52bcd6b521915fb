//! Storage manager for [`DynamicArray`].
//!
//! This module owns the capacity policy of the array: when the backing
//! buffer grows, when it shrinks, and how elements are relocated between
//! buffers.
//!
//! # Growth and Shrink
//!
//! - **Grow**: before an insertion into a full buffer, the capacity is raised
//!   to at least the policy floor and then doubled.
//! - **Shrink**: after a removal, the capacity is halved when the array
//!   occupies at most 25% of it, but only while the capacity is larger than
//!   twice the floor.
//!
//! The gap between the grow point (100% utilization) and the shrink point
//! (25% utilization) keeps alternating insert/remove calls at a boundary
//! from reallocating on every call.
//!
//! ```text
//!   size == capacity           size * 4 <= capacity && capacity > 2 * floor
//!   ┌──────────────┐           ┌──────────────┐
//!   │ insert ──► x2│           │ remove ──► /2│
//!   └──────────────┘           └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rankvec::{CapacityPolicy, DynamicArray};
//!
//! let mut array = DynamicArray::with_policy(CapacityPolicy::with_floor(4));
//! for value in 0..5 {
//!     array.push(value).unwrap();
//! }
//! // 0 -> 8 on the first push, then 8 is enough for five elements.
//! assert_eq!(array.capacity(), 8);
//! assert_eq!(array.stats().grows, 1);
//! ```

use crate::array::DynamicArray;
use crate::error::{ArrayError, Result};

// =============================================================================
// Constants
// =============================================================================

/// Default initial capacity and capacity floor.
pub const DEFAULT_CAPACITY: usize = 10;

/// Utilization divisor for shrinking: shrink when `size * SHRINK_RATIO <= capacity`.
pub const SHRINK_RATIO: usize = 4;

// =============================================================================
// CapacityPolicy
// =============================================================================

/// Capacity configuration for a [`DynamicArray`].
///
/// The policy carries the capacity floor: the minimum capacity a growth
/// starts from and the lower bound that shrinking never crosses.
///
/// # Examples
///
/// ```rust
/// use rankvec::{CapacityPolicy, DEFAULT_CAPACITY};
///
/// let policy = CapacityPolicy::default();
/// assert_eq!(policy.floor(), DEFAULT_CAPACITY);
/// assert_eq!(policy.grown(0), Ok(20));
/// assert_eq!(policy.grown(32), Ok(64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityPolicy {
    floor: usize,
}

impl CapacityPolicy {
    /// Creates a policy with the default floor of [`DEFAULT_CAPACITY`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            floor: DEFAULT_CAPACITY,
        }
    }

    /// Creates a policy with a custom floor.
    ///
    /// A floor of zero would make doubling a no-op, so it is raised to one.
    #[inline]
    #[must_use]
    pub const fn with_floor(floor: usize) -> Self {
        Self {
            floor: if floor == 0 { 1 } else { floor },
        }
    }

    /// Returns the capacity floor.
    #[inline]
    #[must_use]
    pub const fn floor(&self) -> usize {
        self.floor
    }

    /// Computes the capacity a full buffer of `capacity` slots grows to.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the doubled capacity overflows `usize`.
    pub fn grown(&self, capacity: usize) -> Result<usize> {
        capacity
            .max(self.floor)
            .checked_mul(2)
            .ok_or(ArrayError::OutOfMemory {
                capacity: usize::MAX,
            })
    }

    /// Returns `true` if a buffer of `capacity` slots holding `size`
    /// elements should be halved.
    #[must_use]
    pub const fn should_shrink(&self, size: usize, capacity: usize) -> bool {
        capacity > self.floor.saturating_mul(2) && size.saturating_mul(SHRINK_RATIO) <= capacity
    }

    /// Computes the capacity a shrinking buffer of `capacity` slots halves to.
    #[must_use]
    pub fn shrunk(&self, capacity: usize) -> usize {
        (capacity / 2).max(self.floor)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// StorageStats
// =============================================================================

/// Resize counters recorded by the storage manager.
///
/// `relocated` is the total number of elements moved between buffers over
/// the lifetime of the array, which makes the amortized cost of appends
/// observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StorageStats {
    /// Number of buffer growths.
    pub grows: usize,
    /// Number of buffer shrinks.
    pub shrinks: usize,
    /// Total number of elements relocated by growths and shrinks.
    pub relocated: usize,
}

// =============================================================================
// Allocation
// =============================================================================

/// Allocates a buffer of `capacity` vacant slots.
pub(crate) fn allocate<T>(capacity: usize) -> Result<Box<[Option<T>]>> {
    let mut slots = Vec::new();
    if let Err(error) = slots.try_reserve_exact(capacity) {
        tracing::warn!(capacity, %error, "buffer allocation failed");
        return Err(ArrayError::OutOfMemory { capacity });
    }
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

/// Capacity of a fresh buffer holding a copy of `length` elements.
pub(crate) fn copy_capacity(length: usize) -> Result<usize> {
    length.checked_mul(2).ok_or(ArrayError::OutOfMemory {
        capacity: usize::MAX,
    })
}

// =============================================================================
// Resize Operations
// =============================================================================

impl<T> DynamicArray<T> {
    /// Grows the buffer if it is full.
    ///
    /// Called before every insertion.
    pub(crate) fn expand(&mut self) -> Result<()> {
        if self.size < self.capacity() {
            return Ok(());
        }
        let previous = self.capacity();
        let capacity = self.policy.grown(previous)?;
        self.relocate(allocate(capacity)?);
        self.stats.grows += 1;
        tracing::debug!(from = previous, to = capacity, size = self.size, "buffer grown");
        Ok(())
    }

    /// Halves the buffer if utilization has dropped to 25% or below.
    ///
    /// Called after every removal. The removal has already happened, so a
    /// failed allocation keeps the current buffer instead of failing.
    pub(crate) fn shrink(&mut self) {
        self.shrink_with(allocate);
    }

    fn shrink_with<A>(&mut self, allocator: A)
    where
        A: FnOnce(usize) -> Result<Box<[Option<T>]>>,
    {
        let previous = self.capacity();
        if !self.policy.should_shrink(self.size, previous) {
            return;
        }
        let capacity = self.policy.shrunk(previous);
        match allocator(capacity) {
            Ok(slots) => {
                self.relocate(slots);
                self.stats.shrinks += 1;
                tracing::debug!(from = previous, to = capacity, size = self.size, "buffer shrunk");
            }
            Err(error) => {
                tracing::warn!(from = previous, to = capacity, %error, "shrink skipped");
            }
        }
    }

    /// Moves the live elements into `slots` and releases the old buffer.
    fn relocate(&mut self, mut slots: Box<[Option<T>]>) {
        for (target, source) in slots.iter_mut().zip(&mut self.slots[..self.size]) {
            *target = source.take();
        }
        self.slots = slots;
        self.stats.relocated += self.size;
    }
}

// =============================================================================
// Tests
// =============================================================================
