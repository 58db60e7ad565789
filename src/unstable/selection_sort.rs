use std::cmp::Ordering;

use crate::counter::ComparisonCounter;
use crate::SortResult;

sort_impl!("selection_sort_unstable");

/// Sorts a copy of `arr`, but might not preserve the order of equal elements.
///
/// Always performs exactly `n * (n - 1) / 2` comparisons, independent of the input order.
#[inline]
pub fn sort<T>(arr: &[T]) -> SortResult<T>
where
    T: Ord + Clone,
{
    sort_by(arr, |a, b| a.cmp(b))
}

/// Sorts a copy of `arr` with a comparator function, but might not preserve the order of equal
/// elements.
pub fn sort_by<T, F>(arr: &[T], compare: F) -> SortResult<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut v = arr.to_vec();
    let mut counter = ComparisonCounter::new(compare);

    selection_sort(&mut v, &mut counter);

    SortResult {
        sequence: v,
        comparisons: counter.count(),
    }
}

fn selection_sort<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if counter.is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        v.swap(i, min);
    }
}
