//! Utility functions for sorting operations
//!
//! Permutation helpers shared by the strategies, plus a stable merge sort
//! that stops at the first comparison error.

use std::cmp::Ordering;

/// Reorder items in-place based on the given indices
///
/// After the call, position `i` holds the element that was at `indices[i]`.
/// `indices` must be a permutation of `0..items.len()`. Elements are moved
/// by swapping along permutation cycles, so `T` need not be `Clone`.
pub fn reorder_by_indices<T>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        // The element originally at `start` travels along the cycle until it
        // reaches the slot that asks for it.
        let mut current = start;
        loop {
            placed[current] = true;
            let source = indices[current];
            debug_assert!(source < items.len(), "Index out of bounds");
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}

/// True when no adjacent pair is out of order. Equal neighbours count as
/// ordered, so a stable sort of such a slice is the identity.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Stable bottom-up merge sort with a fallible comparison.
///
/// Returns the first error produced by `compare`. On error the contents of
/// `items` are a partially merged permutation of the input; callers that
/// must not expose that state sort a scratch index vector instead.
pub fn try_merge_sort_by<T, E, F>(items: &mut [T], mut compare: F) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = items.len();
    if len < 2 {
        return Ok(());
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                &items[start..mid],
                &items[mid..end],
                &mut buffer[start..end],
                &mut compare,
            )?;
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }
    Ok(())
}

fn merge_runs<T, E, F>(
    left: &[T],
    right: &[T],
    out: &mut [T],
    compare: &mut F,
) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Ties take from the left run, which keeps the sort stable.
        let take_left = if i < left.len() && j < right.len() {
            compare(&right[j], &left[i])? != Ordering::Less
        } else {
            i < left.len()
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
    Ok(())
}
