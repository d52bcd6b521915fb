//! Ordering algorithms for [`DynamicArray`].
//!
//! This module provides the operations that depend on element comparison:
//!
//! - [`DynamicArray::disorder`]: number of adjacent inversions
//! - [`DynamicArray::find`] / [`DynamicArray::find_in`]: backward linear search
//! - [`DynamicArray::sort`] / [`DynamicArray::sort_range`] / [`DynamicArray::sort_by`]:
//!   stable merge sort
//! - [`DynamicArray::search`] / [`DynamicArray::search_in`]: binary search on
//!   sorted ranges
//! - [`DynamicArray::unsort`] / [`DynamicArray::unsort_range`] /
//!   [`DynamicArray::unsort_with`]: random permutation
//!
//! # Search Contract
//!
//! `find` returns the *highest* matching rank. `search` returns the rank of
//! the last element not greater than the target: the rightmost match when
//! the value is present, otherwise its predecessor. `None` means every
//! element in the range is greater than the target.
//!
//! # Examples
//!
//! ```rust
//! use rankvec::DynamicArray;
//!
//! let mut array: DynamicArray<i32> = [5, 1, 4, 1, 3].into_iter().collect();
//! assert_eq!(array.find(&1), Some(3));
//! assert_eq!(array.disorder(), 2);
//!
//! array.sort();
//! assert_eq!(array.disorder(), 0);
//! assert_eq!(array.search(&1), Some(1));
//! assert_eq!(array.search(&2), Some(1));
//! assert_eq!(array.search(&0), None);
//! ```

mod merge;

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::array::{DynamicArray, check_range};
use crate::error::{ArrayError, Result};

impl<T: PartialOrd> DynamicArray<T> {
    /// Counts adjacent pairs `(i, i + 1)` with `elements[i] > elements[i + 1]`.
    ///
    /// Returns 0 for empty, single-element, and sorted arrays.
    #[must_use]
    pub fn disorder(&self) -> usize {
        self.slots[..self.size]
            .windows(2)
            .filter(|pair| pair[0] > pair[1])
            .count()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts the whole array in ascending order.
    ///
    /// The sort is stable and uses only `<`.
    pub fn sort(&mut self) {
        merge::merge_sort_by(
            &mut self.slots[..self.size],
            &mut Vec::with_capacity(self.size / 2),
            &mut |left: &T, right: &T| left < right,
        );
    }

    /// Sorts the elements in `[lo, hi)` in ascending order.
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
    /// let mut array: DynamicArray<i32> = [9, 3, 2, 1, 0].into_iter().collect();
    /// array.sort_range(1, 4).unwrap();
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![9, 1, 2, 3, 0]);
    /// ```
    pub fn sort_range(&mut self, lo: usize, hi: usize) -> Result<()> {
        check_range(lo, hi, self.size)?;
        merge::merge_sort_by(
            &mut self.slots[lo..hi],
            &mut Vec::with_capacity((hi - lo) / 2),
            &mut |left: &T, right: &T| left < right,
        );
        Ok(())
    }

    // =========================================================================
    // Binary Search
    // =========================================================================

    /// Searches the whole sorted array for `value`.
    ///
    /// Returns the rank of the rightmost element equal to `value`, or of the
    /// last element less than it, or `None` if the array is empty or every
    /// element is greater.
    #[must_use]
    pub fn search(&self, value: &T) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.bisect(value, 0, self.size)
    }

    /// Searches the sorted range `[lo, hi)` for `value`.
    ///
    /// Returns the rank (relative to the whole array) of the rightmost
    /// element in range equal to `value`, or of the last element in range
    /// less than it, or `None` if every element in range is greater or the
    /// range is empty.
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
    /// let array: DynamicArray<i32> = [1, 2, 2, 2, 5, 8].into_iter().collect();
    /// assert_eq!(array.search_in(&2, 0, 6), Ok(Some(3)));
    /// assert_eq!(array.search_in(&6, 0, 6), Ok(Some(4)));
    /// assert_eq!(array.search_in(&3, 4, 6), Ok(None));
    /// ```
    pub fn search_in(&self, value: &T, lo: usize, hi: usize) -> Result<Option<usize>> {
        check_range(lo, hi, self.size)?;
        Ok(self.bisect(value, lo, hi))
    }

    /// Narrows `[lo, hi)` to the first rank holding an element greater than
    /// `value`; ties move the lower bound right.
    fn bisect(&self, value: &T, lo: usize, hi: usize) -> Option<usize> {
        let (mut low, mut high) = (lo, hi);
        while low < high {
            let middle = low + (high - low) / 2;
            let greater = self.slots[middle]
                .as_ref()
                .is_some_and(|element| value < element);
            if greater {
                high = middle;
            } else {
                low = middle + 1;
            }
        }
        (low > lo).then(|| low - 1)
    }
}

impl<T> DynamicArray<T> {
    /// Sorts the whole array with a comparator function.
    ///
    /// The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let mut array: DynamicArray<&str> = ["ccc", "a", "bb"].into_iter().collect();
    /// array.sort_by(|left, right| right.len().cmp(&left.len()));
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec!["ccc", "bb", "a"]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge::merge_sort_by(
            &mut self.slots[..self.size],
            &mut Vec::with_capacity(self.size / 2),
            &mut |left: &T, right: &T| compare(left, right) == Ordering::Less,
        );
    }

    // =========================================================================
    // Random Permutation
    // =========================================================================

    /// Randomly permutes the whole array using the thread-local generator.
    pub fn unsort(&mut self) {
        self.slots[..self.size].shuffle(&mut rand::rng());
    }

    /// Randomly permutes the elements in `[lo, hi)` using the thread-local
    /// generator.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo > hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > size`.
    pub fn unsort_range(&mut self, lo: usize, hi: usize) -> Result<()> {
        self.unsort_with(lo, hi, &mut rand::rng())
    }

    /// Randomly permutes the elements in `[lo, hi)` using `rng`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo > hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rankvec::DynamicArray;
    ///
    /// let mut first: DynamicArray<i32> = (0..20).collect();
    /// let mut second = first.clone();
    /// first.unsort_with(0, 20, &mut StdRng::seed_from_u64(7)).unwrap();
    /// second.unsort_with(0, 20, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn unsort_with<R>(&mut self, lo: usize, hi: usize, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        check_range(lo, hi, self.size)?;
        self.slots[lo..hi].shuffle(rng);
        Ok(())
    }
}

impl<T: PartialEq> DynamicArray<T> {
    // =========================================================================
    // Linear Search
    // =========================================================================

    /// Finds the highest rank holding an element equal to `value`.
    ///
    /// An empty array has no match.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.rfind(value, 0, self.size)
    }

    /// Finds the highest rank in `[lo, hi)` holding an element equal to `value`.
    ///
    /// The range is scanned backward from `hi - 1`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidArgument`] if `lo >= hi`.
    /// - [`ArrayError::IndexOutOfRange`] if `hi > size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::{ArrayError, DynamicArray};
    ///
    /// let array: DynamicArray<char> = "abcab".chars().collect();
    /// assert_eq!(array.find_in(&'a', 0, 5), Ok(Some(3)));
    /// assert_eq!(array.find_in(&'a', 0, 3), Ok(Some(0)));
    /// assert_eq!(array.find_in(&'a', 1, 3), Ok(None));
    /// assert_eq!(
    ///     array.find_in(&'a', 2, 2),
    ///     Err(ArrayError::InvalidArgument { lo: 2, hi: 2 })
    /// );
    /// ```
    pub fn find_in(&self, value: &T, lo: usize, hi: usize) -> Result<Option<usize>> {
        if lo >= hi {
            return Err(ArrayError::InvalidArgument { lo, hi });
        }
        check_range(lo, hi, self.size)?;
        Ok(self.rfind(value, lo, hi))
    }

    fn rfind(&self, value: &T, lo: usize, hi: usize) -> Option<usize> {
        self.slots[lo..hi]
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value))
            .map(|offset| lo + offset)
    }
}

// =============================================================================
// Tests
// =============================================================================
