use std::cmp::Ordering;
use std::mem;

use crate::counter::ComparisonCounter;
use crate::SortResult;

sort_impl!("merge_sort_stable");

/// Sorts a copy of `arr`.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Classic top-down merge sort. The slice is halved at `len / 2` until the pieces hold at most one
/// element, then neighbouring pieces are merged back together. One comparison is charged per
/// pair of heads examined while both runs are non-empty, the leftover tail of a run is moved
/// without comparisons. On equal heads the left run wins, which is what makes the sort stable.
///
/// The halving is driven by an explicit stack of index ranges into a single owned buffer, so deep
/// inputs can't exhaust the call stack. It allocates one scratch buffer of `len / 2` elements that
/// is reused by every merge.
#[inline]
pub fn sort<T>(arr: &[T]) -> SortResult<T>
where
    T: Ord + Clone,
{
    sort_by(arr, |a, b| a.cmp(b))
}

/// Sorts a copy of `arr` with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
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

    merge_sort(&mut v, &mut counter);

    SortResult {
        sequence: v,
        comparisons: counter.count(),
    }
}

/// Pending work for one `start..end` range of the buffer.
enum Task {
    /// Split the range and sort both halves.
    Split { start: usize, end: usize },
    /// Both halves are sorted, merge them.
    Merge { start: usize, end: usize },
}

fn merge_sort<T, F>(v: &mut [T], counter: &mut ComparisonCounter<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut buf = Vec::with_capacity(len / 2);

    // Tasks are popped in the order a recursive implementation would run them: left half, right
    // half, then the merge. The stack never holds more than a few entries per level.
    let mut tasks = vec![Task::Split { start: 0, end: len }];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Split { start, end } => {
                if end - start <= 1 {
                    continue;
                }

                let mid = start + (end - start) / 2;
                tasks.push(Task::Merge { start, end });
                tasks.push(Task::Split { start: mid, end });
                tasks.push(Task::Split { start, end: mid });
            }
            Task::Merge { start, end } => {
                let mid = (end - start) / 2;
                merge(&mut v[start..end], mid, &mut buf, counter);
            }
        }
    }
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into one non-decreasing run.
///
/// The left run is cloned into `buf`, after that elements are only moved. Slots of `v` left of
/// the write position hold stale values that are overwritten before the function returns.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut Vec<T>, counter: &mut ComparisonCounter<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    buf.clear();
    buf.extend_from_slice(&v[..mid]);

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    // `out < right` holds while the left run is non-empty, so the swap never hits the element
    // about to be read.
    while left < buf.len() && right < len {
        if counter.is_less(&v[right], &buf[left]) {
            v.swap(out, right);
            right += 1;
        } else {
            mem::swap(&mut v[out], &mut buf[left]);
            left += 1;
        }
        out += 1;
    }

    // A leftover right tail is already in place.
    for elem in buf.drain(left..) {
        v[out] = elem;
        out += 1;
    }
}
