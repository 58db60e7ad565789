// Minimum selection with a swap per position, fixed comparison count.
pub mod selection_sort;

// Median-of-three quicksort with insertion sort for small partitions.
pub mod quick_sort;
