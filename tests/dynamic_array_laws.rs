//! Property-based tests for DynamicArray laws.
//!
//! This module verifies the capacity invariants and the algebraic
//! properties of the ordering and deduplication algorithms using proptest.

use proptest::prelude::*;
use rankvec::DynamicArray;

// =============================================================================
// Helpers
// =============================================================================

fn from_values(values: &[i32]) -> DynamicArray<i32> {
    values.iter().copied().collect()
}

fn contents(array: &DynamicArray<i32>) -> Vec<i32> {
    array.iter().copied().collect()
}

#[derive(Debug, Clone)]
enum Operation {
    Push(i32),
    Insert(usize, i32),
    Remove(usize),
    RemoveRange(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i32>().prop_map(Operation::Push),
        (any::<usize>(), any::<i32>()).prop_map(|(rank, value)| Operation::Insert(rank, value)),
        any::<usize>().prop_map(Operation::Remove),
        (any::<usize>(), any::<usize>()).prop_map(|(lo, hi)| Operation::RemoveRange(lo, hi)),
    ]
}

// =============================================================================
// Storage Laws
// =============================================================================

proptest! {
    /// Appending n elements relocates O(n) elements in total.
    #[test]
    fn prop_push_relocations_are_linear(count in 0usize..2000) {
        let mut array = DynamicArray::new();
        for value in 0..count {
            array.push(value).unwrap();
        }
        let floor = array.policy().floor();
        prop_assert!(array.stats().relocated < 2 * count + floor);
    }

    /// Arbitrary mutation sequences keep size within capacity, keep capacity
    /// at or above the floor once grown, and agree with a Vec model.
    #[test]
    fn prop_mutations_match_vec_model(
        operations in prop::collection::vec(operation(), 0..200)
    ) {
        let mut array = DynamicArray::new();
        let mut model: Vec<i32> = Vec::new();

        for operation in operations {
            match operation {
                Operation::Push(value) => {
                    array.push(value).unwrap();
                    model.push(value);
                }
                Operation::Insert(rank, value) => {
                    let rank = rank % (model.len() + 1);
                    prop_assert_eq!(array.insert(rank, value), Ok(rank));
                    model.insert(rank, value);
                }
                Operation::Remove(rank) => {
                    if model.is_empty() {
                        prop_assert!(array.remove(rank).is_err());
                    } else {
                        let rank = rank % model.len();
                        prop_assert_eq!(array.remove(rank), Ok(model.remove(rank)));
                    }
                }
                Operation::RemoveRange(lo, hi) => {
                    let lo = lo % (model.len() + 1);
                    let hi = lo + hi % (model.len() - lo + 1);
                    prop_assert_eq!(array.remove_range(lo, hi), Ok(hi - lo));
                    model.drain(lo..hi);
                }
            }
            prop_assert!(array.size() <= array.capacity());
            if array.stats().grows > 0 {
                prop_assert!(array.capacity() >= array.policy().floor());
            }
        }
        prop_assert_eq!(contents(&array), model);
    }

    /// Right after a shrink, utilization is above 25% or the buffer sits at
    /// the floor band where no further shrink is allowed.
    #[test]
    fn prop_shrink_respects_hysteresis(
        count in 1usize..500,
        removals in prop::collection::vec(any::<usize>(), 0..500)
    ) {
        let mut array: DynamicArray<usize> = (0..count).collect();
        for removal in removals {
            if array.is_empty() {
                break;
            }
            let shrinks = array.stats().shrinks;
            array.remove(removal % array.size()).unwrap();
            if array.stats().shrinks > shrinks {
                let floor = array.policy().floor();
                prop_assert!(array.capacity() >= floor);
                prop_assert!(array.size() * 8 >= array.capacity() || array.capacity() <= 4 * floor);
            }
        }
    }
}

// =============================================================================
// Copy Laws
// =============================================================================

proptest! {
    /// Copy construction yields an element-wise equal array.
    #[test]
    fn prop_clone_equals_source(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let array = from_values(&values);
        prop_assert_eq!(array.clone(), array);
    }

    /// Range copies agree with slicing.
    #[test]
    fn prop_from_range_matches_slice(
        values in prop::collection::vec(any::<i32>(), 0..100),
        lo in any::<usize>(),
        hi in any::<usize>()
    ) {
        let array = from_values(&values);
        let lo = lo % (values.len() + 1);
        let hi = lo + hi % (values.len() - lo + 1);
        let copy = DynamicArray::from_range(&array, lo, hi).unwrap();
        prop_assert_eq!(contents(&copy), values[lo..hi].to_vec());
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Sorting leaves no adjacent inversions.
    #[test]
    fn prop_sort_then_disorder_is_zero(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut array = from_values(&values);
        array.sort();
        prop_assert_eq!(array.disorder(), 0);

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(contents(&array), expected);
    }

    /// Sorting is stable with respect to equal keys.
    #[test]
    fn prop_sort_is_stable(keys in prop::collection::vec(0u8..8, 0..100)) {
        let mut array: DynamicArray<(u8, usize)> =
            keys.iter().copied().enumerate().map(|(index, key)| (key, index)).collect();
        array.sort_by(|left, right| left.0.cmp(&right.0));

        let mut expected: Vec<(u8, usize)> =
            keys.iter().copied().enumerate().map(|(index, key)| (key, index)).collect();
        expected.sort_by_key(|&(key, _)| key);
        prop_assert_eq!(array.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Search on sorted data finds the rightmost match when present, and the
    /// last smaller element otherwise.
    #[test]
    fn prop_search_returns_last_not_greater(
        values in prop::collection::vec(-50i32..50, 0..100),
        target in -60i32..60
    ) {
        let mut array = from_values(&values);
        array.sort();
        let sorted = contents(&array);
        let expected = sorted.iter().rposition(|element| *element <= target);
        prop_assert_eq!(array.search(&target), expected);
        if sorted.contains(&target) {
            let rank = expected.unwrap();
            prop_assert_eq!(sorted[rank], target);
            prop_assert!(rank + 1 == sorted.len() || sorted[rank + 1] > target);
        }
    }

    /// Backward find returns the highest matching rank.
    #[test]
    fn prop_find_returns_last_match(
        values in prop::collection::vec(0i32..10, 0..100),
        target in 0i32..10
    ) {
        let array = from_values(&values);
        prop_assert_eq!(array.find(&target), values.iter().rposition(|element| *element == target));
    }
}

// =============================================================================
// Deduplication Laws
// =============================================================================

proptest! {
    /// Deduplicate is idempotent and keeps first occurrences in order.
    #[test]
    fn prop_deduplicate_idempotent(values in prop::collection::vec(0i32..20, 0..100)) {
        let mut array = from_values(&values);
        array.deduplicate();
        prop_assert_eq!(array.deduplicate(), 0);

        let mut expected: Vec<i32> = Vec::new();
        for value in values {
            if !expected.contains(&value) {
                expected.push(value);
            }
        }
        prop_assert_eq!(contents(&array), expected);
    }

    /// Uniquify on sorted data leaves a strictly increasing sequence of the
    /// same distinct values.
    #[test]
    fn prop_uniquify_strictly_increasing(values in prop::collection::vec(0i32..20, 0..100)) {
        let mut array = from_values(&values);
        array.sort();
        let removed = array.uniquify();

        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(contents(&array), expected);
        prop_assert_eq!(array.disorder(), 0);
    }
}
