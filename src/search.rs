//! Recursive binary search over sorted slices.

use core::cmp::Ordering;

/// Returns the index of an element equal to `target` in `sorted`, or `None` if there is none.
///
/// `sorted` must be in ascending order. On unsorted input the result is some index or `None`,
/// but never a panic. With duplicates, any one of the matching indices may be returned.
///
/// Example:
/// ```
/// use growvec::search::binary_search;
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
/// assert_eq!(binary_search(&data, &4), Some(3));
/// assert_eq!(binary_search(&data, &12), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    match sorted.len() {
        0 => None,
        n => search_within(sorted, target, 0, n - 1),
    }
}

/// Searches the inclusive window `left..=right`.
fn search_within<T: Ord>(sorted: &[T], target: &T, left: usize, right: usize) -> Option<usize> {
    if left > right { return None; }
    let mid = left + (right - left) / 2;
    match target.cmp(&sorted[mid]) {
        Ordering::Equal => Some(mid),
        // `mid == 0` means the window has nothing left below it
        Ordering::Less => search_within(sorted, target, left, mid.checked_sub(1)?),
        Ordering::Greater => search_within(sorted, target, mid + 1, right),
    }
}
