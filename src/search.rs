use std::cmp::Ordering;

use crate::counter::ComparisonCounter;
use crate::SearchResult;

/// Scans `v` front to back for `target`.
///
/// One comparison is charged per element examined, so a hit at index `i` costs `i + 1` and a miss
/// costs `v.len()`. `v` may be in any order.
#[inline]
pub fn linear_search<T>(v: &[T], target: &T) -> SearchResult
where
    T: PartialEq,
{
    linear_search_by(v, |elem| elem == target)
}

/// Like [`linear_search`], with `pred` deciding whether an element is the one searched for.
pub fn linear_search_by<T, P>(v: &[T], pred: P) -> SearchResult
where
    P: FnMut(&T) -> bool,
{
    let mut counter = ComparisonCounter::new(pred);
    let index = v.iter().position(|elem| counter.matches(elem));

    SearchResult {
        index,
        comparisons: counter.count(),
    }
}

/// Bisects the ascending sorted `v` for `target`.
///
/// Each probe charges exactly one comparison, whichever way the three-way test goes, so a search
/// over `n` elements costs at most `ceil(log2(n + 1))`.
///
/// If `v` is not sorted the returned index is unspecified. This is not detected, doing so would
/// cost a linear pre-scan.
#[inline]
pub fn binary_search<T>(v: &[T], target: &T) -> SearchResult
where
    T: Ord,
{
    binary_search_by(v, |elem| elem.cmp(target))
}

/// Like [`binary_search`], with `f` returning the ordering of an element relative to the target,
/// in the manner of [`slice::binary_search_by`].
pub fn binary_search_by<T, F>(v: &[T], f: F) -> SearchResult
where
    F: FnMut(&T) -> Ordering,
{
    let mut counter = ComparisonCounter::new(f);

    // `lo..hi` is the half-open window still in play. `mid` is the floor of the midpoint of the
    // inclusive bounds `lo..=hi - 1`.
    let mut lo = 0;
    let mut hi = v.len();
    let mut index = None;

    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        match counter.probe(&v[mid]) {
            Ordering::Equal => {
                index = Some(mid);
                break;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    SearchResult {
        index,
        comparisons: counter.count(),
    }
}
