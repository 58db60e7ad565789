// Adjacent swap sort with early exit on a swap free pass.
pub mod bubble_sort;

// Top-down merge sort, driven by an explicit work stack.
pub mod merge_sort;
