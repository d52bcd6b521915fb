//! Stable merge sort over a run of occupied slots.

/// Sorts `slots` so that no element is preceded by one it is less than.
///
/// Equal elements keep their relative order. `scratch` is reused across
/// merges to hold the left half being merged.
pub(super) fn merge_sort_by<T, F>(slots: &mut [Option<T>], scratch: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if slots.len() < 2 {
        return;
    }
    let middle = slots.len() / 2;
    {
        let (left, right) = slots.split_at_mut(middle);
        merge_sort_by(left, scratch, is_less);
        merge_sort_by(right, scratch, is_less);
    }
    if out_of_order(&slots[middle - 1], &slots[middle], is_less) {
        merge(slots, middle, scratch, is_less);
    }
}

fn out_of_order<T, F>(left: &Option<T>, right: &Option<T>, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match (left, right) {
        (Some(left), Some(right)) => is_less(right, left),
        _ => false,
    }
}

/// Merges the sorted runs `[0, middle)` and `[middle, len)`.
fn merge<T, F>(slots: &mut [Option<T>], middle: usize, scratch: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    scratch.extend(slots[..middle].iter_mut().rev().filter_map(Option::take));
    let mut hole = MergeHole {
        slots,
        pending: scratch,
        target: 0,
    };
    let mut right = middle;

    // `target < right` while the left run is non-empty, so no unread
    // right-hand element is overwritten.
    while let Some(candidate) = hole.pending.last() {
        let take_right = hole
            .slots
            .get(right)
            .and_then(Option::as_ref)
            .is_some_and(|element| is_less(element, candidate));
        let next = if take_right {
            right += 1;
            hole.slots[right - 1].take()
        } else {
            hole.pending.pop()
        };
        hole.slots[hole.target] = next;
        hole.target += 1;
    }
}

/// The vacant stretch `[target, target + pending.len())` of a merge in
/// progress.
///
/// `pending` holds the unmerged left run in reverse, so `pop` yields its
/// front. Dropping the hole writes the pending elements back, which keeps
/// every element in `slots` when the comparator panics.
struct MergeHole<'a, T> {
    slots: &'a mut [Option<T>],
    pending: &'a mut Vec<T>,
    target: usize,
}

impl<T> Drop for MergeHole<'_, T> {
    fn drop(&mut self) {
        while let Some(element) = self.pending.pop() {
            self.slots[self.target] = Some(element);
            self.target += 1;
        }
    }
}
