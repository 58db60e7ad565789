use std::cmp::Ordering;

use crate::counter::ComparisonCounter;
use crate::SortResult;

sort_impl!("bubble_sort_stable");

/// Sorts a copy of `arr`.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case. A pass
/// that performs no swap ends the sort, so already sorted input costs exactly `n - 1`
/// comparisons.
///
/// One comparison is charged per adjacent pair examined, swapped or not.
#[inline]
pub fn sort<T>(arr: &[T]) -> SortResult<T>
where
    T: Ord + Clone,
{
    sort_by(arr, |a, b| a.cmp(b))
}

/// Sorts a copy of `arr` with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified.
pub fn sort_by<T, F>(arr: &[T], compare: F) -> SortResult<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut v = arr.to_vec();
    let mut counter = ComparisonCounter::new(compare);

    bubble_sort(&mut v, &mut counter);

    SortResult {
        sequence: v,
        comparisons: counter.count(),
    }
}

fn bubble_sort<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for i in 0..len {
        let mut swapped = false;

        // After pass `i` the largest `i + 1` elements sit in their final place.
        for j in 0..(len - i - 1) {
            if counter.is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
