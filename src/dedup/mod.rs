//! Duplicate elimination and traversal for [`DynamicArray`].
//!
//! - [`DynamicArray::deduplicate`] works on arbitrary order and keeps the
//!   first occurrence of every value. It compares each element against the
//!   prefix before it, so it runs in O(n²).
//! - [`DynamicArray::uniquify`] requires sorted input and collapses runs of
//!   equal neighbours in a single O(n) pass.
//! - [`DynamicArray::traverse`] applies a visitor to every element in rank
//!   order.
//!
//! # Examples
//!
//! ```rust
//! use rankvec::DynamicArray;
//!
//! let mut array: DynamicArray<i32> = [2, 1, 2, 3, 1].into_iter().collect();
//! assert_eq!(array.deduplicate(), 2);
//! assert_eq!(format!("{array}"), "[2, 1, 3]");
//!
//! array.sort();
//! array.traverse(|element| *element *= 10);
//! assert_eq!(format!("{array}"), "[10, 20, 30]");
//! ```

use crate::array::DynamicArray;

impl<T: PartialEq> DynamicArray<T> {
    /// Removes every element equal to an earlier one and returns how many
    /// were removed.
    ///
    /// The relative order of first occurrences is preserved.
    pub fn deduplicate(&mut self) -> usize {
        let original = self.size;
        let mut rank = 1;
        while rank < self.size {
            if self.seen_before(rank) {
                self.erase(rank, rank + 1);
            } else {
                rank += 1;
            }
        }
        original - self.size
    }

    fn seen_before(&self, rank: usize) -> bool {
        self.slots[rank]
            .as_ref()
            .is_some_and(|value| self.slots[..rank].iter().any(|slot| slot.as_ref() == Some(value)))
    }

    /// Removes adjacent duplicates from a sorted array and returns how many
    /// were removed.
    ///
    /// Afterward every pair of neighbours is distinct and the array is still
    /// sorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = [1, 1, 2, 3, 3, 3, 4].into_iter().collect();
    /// assert_eq!(array.uniquify(), 3);
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn uniquify(&mut self) -> usize {
        if self.size < 2 {
            return 0;
        }
        let mut last = 0;
        for next in 1..self.size {
            if self.slots[last] != self.slots[next] {
                last += 1;
                if last != next {
                    let moved = self.slots[next].take();
                    self.slots[last] = moved;
                }
            }
        }
        self.erase(last + 1, self.size)
    }
}

impl<T> DynamicArray<T> {
    /// Applies `visit` to every element in rank order.
    ///
    /// The visitor receives each element mutably and may modify it in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::DynamicArray;
    ///
    /// let mut array: DynamicArray<String> = ["a", "b"].into_iter().map(String::from).collect();
    /// let mut visited = 0;
    /// array.traverse(|element| {
    ///     element.push('!');
    ///     visited += 1;
    /// });
    /// assert_eq!(visited, 2);
    /// assert_eq!(format!("{array}"), "[a!, b!]");
    /// ```
    pub fn traverse<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        for element in self.iter_mut() {
            visit(element);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn array_of(values: &[i32]) -> DynamicArray<i32> {
        values.iter().copied().collect()
    }

    fn contents(array: &DynamicArray<i32>) -> Vec<i32> {
        array.iter().copied().collect()
    }

    // =========================================================================
    // Deduplicate Tests
    // =========================================================================

    #[rstest]
    #[case(&[], &[], 0)]
    #[case(&[4], &[4], 0)]
    #[case(&[1, 1, 1], &[1], 2)]
    #[case(&[3, 1, 4, 1, 5, 9, 2, 6, 1], &[3, 1, 4, 5, 9, 2, 6], 2)]
    #[case(&[1, 2, 3], &[1, 2, 3], 0)]
    fn test_deduplicate(#[case] input: &[i32], #[case] expected: &[i32], #[case] removed: usize) {
        let mut array = array_of(input);
        assert_eq!(array.deduplicate(), removed);
        assert_eq!(contents(&array), expected);
    }

    #[rstest]
    fn test_deduplicate_is_idempotent() {
        let mut array = array_of(&[5, 5, 4, 5, 4, 3]);
        assert_eq!(array.deduplicate(), 3);
        assert_eq!(array.deduplicate(), 0);
    }

    #[rstest]
    fn test_deduplicate_shrinks_buffer() {
        let mut array: DynamicArray<i32> = std::iter::repeat_n(7, 100).collect();
        assert_eq!(array.capacity(), 200);
        assert_eq!(array.deduplicate(), 99);
        assert_eq!(array.size(), 1);
        assert_eq!(array.capacity(), 12);
    }

    // =========================================================================
    // Uniquify Tests
    // =========================================================================

    #[rstest]
    #[case(&[], &[], 0)]
    #[case(&[1], &[1], 0)]
    #[case(&[1, 1], &[1], 1)]
    #[case(&[1, 2, 2, 3, 3, 3], &[1, 2, 3], 3)]
    #[case(&[1, 2, 3], &[1, 2, 3], 0)]
    #[case(&[0, 0, 0, 0, 9], &[0, 9], 3)]
    fn test_uniquify(#[case] input: &[i32], #[case] expected: &[i32], #[case] removed: usize) {
        let mut array = array_of(input);
        assert_eq!(array.uniquify(), removed);
        assert_eq!(contents(&array), expected);
        assert!(contents(&array).windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn test_uniquify_drops_owned_duplicates() {
        let mut array: DynamicArray<String> = ["a", "a", "b", "b", "c"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(array.uniquify(), 2);
        assert_eq!(format!("{array}"), "[a, b, c]");
    }

    // =========================================================================
    // Traverse Tests
    // =========================================================================

    #[rstest]
    fn test_traverse_visits_in_rank_order() {
        let mut array = array_of(&[3, 1, 2]);
        let mut order = Vec::new();
        array.traverse(|element| order.push(*element));
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_traverse_mutates_in_place() {
        let mut array = array_of(&[1, 2, 3]);
        array.traverse(|element| *element += 1);
        assert_eq!(contents(&array), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_traverse_accepts_function_pointer() {
        fn negate(element: &mut i32) {
            *element = -*element;
        }
        let mut array = array_of(&[1, -2]);
        array.traverse(negate);
        assert_eq!(contents(&array), vec![-1, 2]);
    }
}
