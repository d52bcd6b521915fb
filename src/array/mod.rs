//! Rank-addressed dynamic array.
//!
//! This module provides [`DynamicArray`], a contiguous, growable sequence
//! whose buffer is managed explicitly by the [`storage`](crate::storage)
//! module, together with its access and mutation API.
//!
//! # Overview
//!
//! Elements are addressed by *rank*, a zero-based index into the valid range
//! `[0, size)`. Every rank-taking operation validates its argument and
//! reports violations as [`ArrayError`] values instead of clamping.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity                    |
//! |-----------------|-------------------------------|
//! | `at` / `get`    | O(1)                          |
//! | `push`          | O(1) amortized                |
//! | `insert`        | O(N)                          |
//! | `remove`        | O(N)                          |
//! | `remove_range`  | O(N)                          |
//! | `size`          | O(1)                          |
//! | `is_empty`      | O(1)                          |
//!
//! # Examples
//!
//! ```rust
//! use rankvec::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.push(1).unwrap();
//! array.push(3).unwrap();
//! array.insert(1, 2).unwrap();
//!
//! assert_eq!(array.at(1), Ok(&2));
//! assert_eq!(array.remove(0), Ok(1));
//! assert_eq!(array.size(), 2);
//! ```

mod iter;

pub use iter::{IntoIter, Iter, IterMut};

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ArrayError, Result};
use crate::storage::{CapacityPolicy, DEFAULT_CAPACITY, StorageStats, allocate, copy_capacity};

/// Validates a half-open range `[lo, hi)` against `size`.
pub(crate) const fn check_range(lo: usize, hi: usize, size: usize) -> Result<()> {
    if lo > hi {
        return Err(ArrayError::InvalidArgument { lo, hi });
    }
    if hi > size {
        return Err(ArrayError::IndexOutOfRange { rank: hi, size });
    }
    Ok(())
}

// =============================================================================
// DynamicArray Definition
// =============================================================================

/// A contiguous, resizable sequence with rank-based access.
///
/// The array owns a heap buffer of `capacity` slots of which the first
/// `size` hold elements. The buffer is resized only by the storage manager:
/// doubled when an insertion finds it full, halved when a removal leaves it
/// at most a quarter full.
///
/// # Examples
///
/// ```rust
/// use rankvec::DynamicArray;
///
/// let array: DynamicArray<i32> = (1..=5).collect();
/// assert_eq!(array.size(), 5);
/// assert_eq!(array.capacity(), 10);
/// assert_eq!(format!("{array}"), "[1, 2, 3, 4, 5]");
/// ```
pub struct DynamicArray<T> {
    /// Owned buffer; `[0, size)` is `Some`, `[size, capacity)` is `None`.
    pub(crate) slots: Box<[Option<T>]>,
    /// Number of valid elements.
    pub(crate) size: usize,
    pub(crate) policy: CapacityPolicy,
    pub(crate) stats: StorageStats,
}

impl<T> DynamicArray<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a new empty array with the default capacity policy.
    ///
    /// No buffer is allocated until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let array: DynamicArray<i32> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::default())
    }

    /// Creates a new empty array governed by `policy`.
    #[must_use]
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self {
            slots: Box::new([]),
            size: 0,
            policy,
            stats: StorageStats::default(),
        }
    }

    /// Creates a new empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_capacity(16).unwrap();
    /// assert_eq!(array.capacity(), 16);
    /// assert_eq!(array.size(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate(capacity)?,
            ..Self::new()
        })
    }

    /// Builds an array from owned elements with a buffer of twice their count.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        let size = elements.len();
        let slots = elements
            .into_iter()
            .map(Some)
            .chain(std::iter::repeat_with(|| None).take(size))
            .collect();
        Self {
            slots,
            size,
            ..Self::new()
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of elements in the array.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity policy governing this array.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Returns the resize counters recorded so far.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> StorageStats {
        self.stats
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the element at `rank`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.slots[..self.size].get(rank).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the element at `rank`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, rank: usize) -> Option<&mut T> {
        self.slots[..self.size].get_mut(rank).and_then(Option::as_mut)
    }

    /// Returns a reference to the element at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `rank >= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::{ArrayError, DynamicArray};
    ///
    /// let array: DynamicArray<char> = "ab".chars().collect();
    /// assert_eq!(array.at(1), Ok(&'b'));
    /// assert_eq!(array.at(2), Err(ArrayError::IndexOutOfRange { rank: 2, size: 2 }));
    /// ```
    pub fn at(&self, rank: usize) -> Result<&T> {
        self.get(rank).ok_or(ArrayError::IndexOutOfRange {
            rank,
            size: self.size,
        })
    }

    /// Returns a mutable reference to the element at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `rank >= size`.
    pub fn at_mut(&mut self, rank: usize) -> Result<&mut T> {
        let size = self.size;
        self.get_mut(rank)
            .ok_or(ArrayError::IndexOutOfRange { rank, size })
    }

    /// Returns an iterator over the elements in rank order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.size])
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots[..self.size])
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Inserts `value` at `rank`, shifting `[rank, size)` one slot to the right.
    ///
    /// Returns the rank the value was stored at.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::IndexOutOfRange`] if `rank > size`.
    /// - [`ArrayError::OutOfMemory`] if the buffer is full and cannot grow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = [1, 3].into_iter().collect();
    /// assert_eq!(array.insert(1, 2), Ok(1));
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, rank: usize, value: T) -> Result<usize> {
        if rank > self.size {
            return Err(ArrayError::IndexOutOfRange {
                rank,
                size: self.size,
            });
        }
        self.expand()?;
        // slot `size` is vacant after expand; rotating brings it to `rank`
        self.slots[rank..=self.size].rotate_right(1);
        self.slots[rank] = Some(value);
        self.size += 1;
        Ok(rank)
    }

    /// Appends `value` as the last element.
    ///
    /// Equivalent to `insert(size, value)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the buffer is full and cannot grow.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<usize> {
        self.insert(self.size, value)
    }

    /// Removes and returns the element at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `rank >= size`.
    pub fn remove(&mut self, rank: usize) -> Result<T> {
        let size = self.size;
        let value = self.slots[..size]
            .get_mut(rank)
            .and_then(Option::take)
            .ok_or(ArrayError::IndexOutOfRange { rank, size })?;
        self.erase(rank, rank + 1);
        Ok(value)
    }

    /// Removes the elements in `[lo, hi)`, closing the gap by shifting the
    /// suffix left, and returns the number of elements removed.
    ///
    /// An empty range is a no-op returning 0. The buffer may shrink
    /// afterward; if that allocation fails the current buffer is kept.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo > hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = (0..6).collect();
    /// assert_eq!(array.remove_range(1, 4), Ok(3));
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 4, 5]);
    /// assert_eq!(array.remove_range(1, 1), Ok(0));
    /// ```
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> Result<usize> {
        check_range(lo, hi, self.size)?;
        Ok(self.erase(lo, hi))
    }

    /// Removes the elements in the valid range `[lo, hi)` and shrinks.
    pub(crate) fn erase(&mut self, lo: usize, hi: usize) -> usize {
        if lo == hi {
            return 0;
        }
        let removed = hi - lo;
        for slot in &mut self.slots[lo..hi] {
            *slot = None;
        }
        self.slots[lo..self.size].rotate_left(removed);
        self.size -= removed;
        self.shrink();
        removed
    }
}

// =============================================================================
// Copy Construction and Assignment
// =============================================================================

impl<T: Clone> DynamicArray<T> {
    /// Deep-copies `length` elements into a buffer of `2 * length` slots.
    fn copied<'a>(elements: impl Iterator<Item = &'a T>, length: usize) -> Result<Self>
    where
        T: 'a,
    {
        let mut slots = allocate(copy_capacity(length)?)?;
        for (slot, element) in slots.iter_mut().zip(elements) {
            *slot = Some(element.clone());
        }
        Ok(Self {
            slots,
            size: length,
            ..Self::new()
        })
    }

    /// Creates an array holding `size` clones of `value`.
    ///
    /// The array uses the default [`CapacityPolicy`], so the buffer holds at
    /// least [`DEFAULT_CAPACITY`] slots. Use [`DynamicArray::with_policy`]
    /// and [`Extend`] for a custom floor.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let array = DynamicArray::from_elem(3, "x").unwrap();
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec!["x", "x", "x"]);
    /// ```
    pub fn from_elem(size: usize, value: T) -> Result<Self> {
        let mut slots = allocate(size.max(DEFAULT_CAPACITY))?;
        for slot in &mut slots[..size] {
            *slot = Some(value.clone());
        }
        Ok(Self {
            slots,
            size,
            ..Self::new()
        })
    }

    /// Creates an array by copying every element of `source`.
    ///
    /// The buffer is sized at twice the source length.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    pub fn from_slice(source: &[T]) -> Result<Self> {
        Self::copied(source.iter(), source.len())
    }

    /// Creates an array by copying `source[lo..hi]`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo > hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > source.len()`.
    /// - [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    pub fn from_slice_range(source: &[T], lo: usize, hi: usize) -> Result<Self> {
        check_range(lo, hi, source.len())?;
        tracing::trace!(lo, hi, "copying slice range");
        Self::copied(source[lo..hi].iter(), hi - lo)
    }

    /// Creates an array by copying the elements of `source` in `[lo, hi)`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo > hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > source.size()`.
    /// - [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let source: DynamicArray<i32> = (0..10).collect();
    /// let middle = DynamicArray::from_range(&source, 3, 6).unwrap();
    /// assert_eq!(middle.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert_eq!(middle.capacity(), 6);
    /// ```
    pub fn from_range(source: &Self, lo: usize, hi: usize) -> Result<Self> {
        check_range(lo, hi, source.size)?;
        tracing::trace!(lo, hi, "copying array range");
        let mut copy = Self::copied(source.iter().skip(lo).take(hi - lo), hi - lo)?;
        copy.policy = source.policy;
        Ok(copy)
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The previous buffer is released once the copy has been made, so a
    /// failed allocation leaves `self` untouched. Assigning an array to
    /// itself cannot be expressed: `&mut self` and `&Self` never alias.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfMemory`] if the buffer cannot be allocated.
    pub fn assign(&mut self, source: &Self) -> Result<()> {
        let copy = Self::from_range(source, 0, source.size)?;
        self.slots = copy.slots;
        self.size = copy.size;
        self.policy = copy.policy;
        Ok(())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::from_vec(self.iter().cloned().collect());
        copy.policy = self.policy;
        copy
    }
}

impl<T> std::ops::Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, rank: usize) -> &T {
        match self.at(rank) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, rank: usize) -> &mut T {
        match self.at_mut(rank) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    /// Appends every element of `iter`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow, as `Vec::extend` does.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(error) = self.push(value) {
                panic!("{error}");
            }
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.size)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (rank, element) in self.iter().enumerate() {
            if rank > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DynamicArray<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct DynamicArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for DynamicArrayVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = DynamicArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(DynamicArray::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DynamicArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DynamicArrayVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
