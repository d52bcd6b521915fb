//! Iterators over the live elements of a [`DynamicArray`](super::DynamicArray).
//!
//! Each iterator walks the occupied prefix of the buffer, so vacant slots
//! past `size` are never observed.

use std::iter::FusedIterator;

/// Borrowing iterator returned by [`DynamicArray::iter`](super::DynamicArray::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`DynamicArray::iter_mut`](super::DynamicArray::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(slots: &'a mut [Option<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `DynamicArray::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(slots: Box<[Option<T>]>, size: usize) -> Self {
        let mut slots = slots.into_vec();
        slots.truncate(size);
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use rstest::rstest;

    #[rstest]
    fn test_iter_is_exact_size_and_reversible() {
        let array: DynamicArray<i32> = (1..=4).collect();
        let iterator = array.iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[rstest]
    fn test_iter_skips_vacant_slots() {
        let mut array = DynamicArray::with_capacity(32).unwrap();
        array.push(1).unwrap();
        assert_eq!(array.iter().count(), 1);
    }

    #[rstest]
    fn test_iter_mut_modifies_in_place() {
        let mut array: DynamicArray<i32> = (1..=3).collect();
        for element in &mut array {
            *element *= 10;
        }
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_into_iter_yields_owned_values() {
        let array: DynamicArray<String> = ["x", "y"].into_iter().map(String::from).collect();
        let owned: Vec<String> = array.into_iter().collect();
        assert_eq!(owned, vec![String::from("x"), String::from("y")]);
    }

    #[rstest]
    fn test_into_iter_len_excludes_vacant_slots() {
        let array: DynamicArray<i32> = (0..5).collect();
        assert_eq!(array.capacity(), 10);
        assert_eq!(array.into_iter().len(), 5);
    }
}
