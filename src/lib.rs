//! Search and sort algorithms that report how many element comparisons they performed.
//!
//! Every operation is a pure function over borrowed input. Sorts work on an owned copy and hand it
//! back in a [`SortResult`], searches return a [`SearchResult`]. The comparison count is local to
//! the top-level call that produced it.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &[T]) -> (Vec<T>, u64)
            where
                T: Ord + Clone,
            {
                sort(arr).into_parts()
            }

            #[inline]
            fn sort_by<T, F>(arr: &[T], compare: F) -> (Vec<T>, u64)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare).into_parts()
            }
        }
    };
}

mod counter;

pub mod report;
pub mod search;
pub mod stable;
pub mod unstable;

pub use search::{binary_search, linear_search};
pub use stable::bubble_sort::sort as bubble_sort;
pub use stable::merge_sort::sort as merge_sort;
pub use unstable::quick_sort::sort as quick_sort;
pub use unstable::selection_sort::sort as selection_sort;

/// Outcome of a search. `index` is `None` when the target is absent, which is a normal result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub comparisons: u64,
}

/// Sorted copy of the input together with the comparisons spent producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortResult<T> {
    pub sequence: Vec<T>,
    pub comparisons: u64,
}

impl<T> SortResult<T> {
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, u64) {
        (self.sequence, self.comparisons)
    }
}
