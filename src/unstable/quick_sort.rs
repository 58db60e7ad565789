use std::cmp::Ordering;

use crate::counter::ComparisonCounter;
use crate::SortResult;

sort_impl!("quick_sort_median_3_unstable");

// Partitions of up to this many elements are sorted with insertion sort.
const SMALL_SORT_THRESHOLD: usize = 10;

/// Sorts a copy of `arr`, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* \* log(*n*)) expected,
/// *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Hybrid quicksort. Partitions of at most ten elements are finished with insertion sort, larger
/// ones pick the median of their first, middle and last element as pivot and are split with a
/// two-pointer Hoare scan. Both scan loops stop on elements equal to the pivot, which keeps
/// inputs with many duplicates balanced.
///
/// Charged comparisons: every insertion sort shift test, including the test that stops the shift,
/// and every scan test of the partition loop. That is one per skipped element plus two per
/// scanning round for the tests that stop the pointers. The median-of-three reordering is pivot
/// bookkeeping and is not charged.
///
/// Partitions are `start..end` ranges into one owned buffer kept on an explicit stack, the smaller
/// side is always handled first so the stack stays *O*(log(*n*)).
#[inline]
pub fn sort<T>(arr: &[T]) -> SortResult<T>
where
    T: Ord + Clone,
{
    sort_by(arr, |a, b| a.cmp(b))
}

/// Sorts a copy of `arr` with a comparator function, but might not preserve the order of equal
/// elements.
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

    quicksort(&mut v, &mut counter);

    SortResult {
        sequence: v,
        comparisons: counter.count(),
    }
}

fn quicksort<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ranges = vec![(0, v.len())];

    while let Some((start, end)) = ranges.pop() {
        let part = &mut v[start..end];

        if part.len() <= SMALL_SORT_THRESHOLD {
            insertion_sort(part, counter);
            continue;
        }

        let pivot_pos = partition(part, counter);

        let left = (start, start + pivot_pos);
        let right = (start + pivot_pos + 1, end);

        // Larger side first, the smaller one is popped next.
        if left.1 - left.0 > right.1 - right.0 {
            ranges.push(left);
            ranges.push(right);
        } else {
            ranges.push(right);
            ranges.push(left);
        }
    }
}

/// Sorts `v` by shifting each element left past every larger neighbour.
fn insertion_sort<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && counter.is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Orders `v[0]`, `v[mid]` and `v[len - 1]` so the median ends up in the middle. Not charged.
fn median_of_three<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let low = 0;
    let high = v.len() - 1;
    let mid = (low + high) / 2;

    if counter.is_less_uncharged(&v[mid], &v[low]) {
        v.swap(low, mid);
    }
    if counter.is_less_uncharged(&v[high], &v[low]) {
        v.swap(low, high);
    }
    if counter.is_less_uncharged(&v[high], &v[mid]) {
        v.swap(mid, high);
    }

    mid
}

/// Partitions `v` around its median-of-three and returns the final position of the pivot. All
/// elements left of it compare less or equal, all elements right of it greater or equal.
///
/// `v` must hold more than [`SMALL_SORT_THRESHOLD`] elements.
fn partition<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = v.len() - 1;
    let mid = median_of_three(v, counter);

    // Park the pivot next to the end. `v[0] <= pivot <= v[high]` now act as sentinels for the two
    // scans, and the pivot slot itself is never touched by them.
    let pivot = high - 1;
    v.swap(mid, pivot);

    let mut left = 0;
    let mut right = pivot;

    loop {
        left += 1;
        while counter.is_less(&v[left], &v[pivot]) {
            left += 1;
        }

        right -= 1;
        while counter.is_less(&v[pivot], &v[right]) {
            right -= 1;
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
    }

    v.swap(left, pivot);
    left
}
