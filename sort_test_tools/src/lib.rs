use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// An instrumented sort. Both entry points leave the input untouched and return the sorted copy
/// together with the number of comparisons that were charged.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &[T]) -> (Vec<T>, u64)
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &[T], compare: F) -> (Vec<T>, u64)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_sort_test_typed {
    ($sort_impl:ty, $test_fn_name:ident, $($ty:ident),+) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$test_fn_name _ $ty>]() {
                    $crate::tests::$test_fn_name::<$sort_impl, $crate::tests::types::$ty>();
                }
            )+
        }
    };
}

/// Generates the full sort test suite for `$sort_impl`, one `#[test]` per property and element
/// type. Invoke it once per module.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, single_and_pair);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, input_untouched);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, panic_retain_original);
        $crate::instantiate_sort_test_inner!($sort_impl, independent_counters);
        $crate::instantiate_sort_test_typed!($sort_impl, random, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, random_zipf, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, ascending, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, descending, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, saw_mixed, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, pipe_organ, i32, u64, string);
        $crate::instantiate_sort_test_typed!($sort_impl, random_binary, i32, u64, string);
    };
}

/// Like [`instantiate_sort_tests`], plus the stability checks.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_with_patterns);
    };
}
