use counted_sort_rs::{bubble_sort, merge_sort, quick_sort, selection_sort, SortResult};
use sort_test_tools::patterns;

type SortFn = fn(&[i32]) -> SortResult<i32>;

const SORTS: [SortFn; 4] = [bubble_sort, selection_sort, merge_sort, quick_sort];

const SIZES: [usize; 12] = [1, 2, 3, 5, 10, 11, 16, 33, 100, 257, 1_000, 2_000];

fn quadratic(n: usize) -> u64 {
    (n * n.saturating_sub(1) / 2) as u64
}

#[test]
fn empty_and_single_cost_nothing() {
    let empty: [i32; 0] = [];
    for sort in SORTS {
        assert_eq!(
            sort(&empty),
            SortResult {
                sequence: Vec::new(),
                comparisons: 0
            }
        );
        assert_eq!(
            sort(&[42]),
            SortResult {
                sequence: vec![42],
                comparisons: 0
            }
        );
    }
}

#[test]
fn bubble_sort_worked_example() {
    let result = bubble_sort(&[5, 3, 1, 4, 2]);
    assert_eq!(result.sequence, vec![1, 2, 3, 4, 5]);
    assert_eq!(result.comparisons, 10);
}

#[test]
fn bubble_sort_sorted_input_single_pass() {
    for len in SIZES {
        let input = patterns::ascending(len);
        let result = bubble_sort(&input);
        assert_eq!(result.sequence, input);
        assert_eq!(result.comparisons, len as u64 - 1);
    }
}

#[test]
fn bubble_sort_all_equal_single_pass() {
    let result = bubble_sort(&patterns::all_equal(500));
    assert_eq!(result.comparisons, 499);
}

#[test]
fn bubble_sort_never_exceeds_quadratic() {
    for len in SIZES {
        assert_eq!(bubble_sort(&patterns::descending(len)).comparisons, quadratic(len));
        assert!(bubble_sort(&patterns::random(len)).comparisons <= quadratic(len));
    }
}

#[test]
fn selection_sort_is_always_quadratic() {
    for len in SIZES {
        for input in [
            patterns::ascending(len),
            patterns::descending(len),
            patterns::random(len),
            patterns::all_equal(len),
        ] {
            assert_eq!(selection_sort(&input).comparisons, quadratic(len));
        }
    }
}

#[test]
fn merge_sort_exact_counts() {
    // Sorted input: every merge exhausts the left run after `len(left)` comparisons.
    assert_eq!(merge_sort(&[1, 2]).comparisons, 1);
    assert_eq!(merge_sort(&[1, 2, 3, 4]).comparisons, 4);
    assert_eq!(merge_sort(&[1, 2, 3, 4, 5, 6, 7, 8]).comparisons, 12);

    // [2, 1] | [4, 3]: one comparison per pair, then 2 for [1, 2] vs [3, 4].
    assert_eq!(merge_sort(&[2, 1, 4, 3]).comparisons, 4);
    // [1, 3] vs [2, 4] needs 3 comparisons before the left run empties.
    assert_eq!(merge_sort(&[3, 1, 4, 2]).comparisons, 5);
}

#[test]
fn merge_sort_within_n_log_n() {
    for len in SIZES {
        let bound = len as f64 * (len as f64).log2().ceil();
        let result = merge_sort(&patterns::random(len));
        assert!(result.comparisons as f64 <= bound);
    }
}

#[test]
fn merge_sort_stable_on_key() {
    let input = [(1, 'a'), (1, 'b')];
    let result = counted_sort_rs::stable::merge_sort::sort_by(&input, |a, b| a.0.cmp(&b.0));
    assert_eq!(result.sequence, vec![(1, 'a'), (1, 'b')]);
    assert_eq!(result.comparisons, 1);
}

#[test]
fn quick_sort_small_partitions_use_insertion_sort() {
    // Sorted: one stopping test per element after the first.
    assert_eq!(quick_sort(&patterns::ascending(10)).comparisons, 9);
    // Reversed: every element shifts all the way left, no stopping test.
    assert_eq!(quick_sort(&patterns::descending(10)).comparisons, 45);
    // [3, 1, 2]: 1 shift for 1, then 2 vs 3 shifts and 2 vs 1 stops.
    assert_eq!(quick_sort(&[3, 1, 2]).comparisons, 3);
}

#[test]
fn quick_sort_partition_count() {
    // 11 sorted elements. Median of three picks 5 and parks it at index 9, uncharged, which moves
    // 9 to index 5. Left skips 1..=4 (4) and stops on 9, right skips 8, 7, 6, 9 (4) and stops on
    // 4, +2 for the two stopping tests, the pointers have crossed. The final swap restores sorted
    // order, both 5 element sides cost 4 each in insertion sort.
    let result = quick_sort(&patterns::ascending(11));
    assert_eq!(result.sequence, patterns::ascending(11));
    assert_eq!(result.comparisons, 4 + 4 + 2 + 4 + 4);
}

#[test]
fn quick_sort_sorted_input_near_n_log_n() {
    let len = 10_000;
    let input = patterns::ascending(len);
    let result = quick_sort(&input);

    assert_eq!(result.sequence, input);
    let n_log_n = len as f64 * (len as f64).log2();
    assert!((result.comparisons as f64) < 2.0 * n_log_n);
}

#[test]
fn quick_sort_large_inputs() {
    for input in [
        patterns::descending(10_000),
        patterns::all_equal(50_000),
        patterns::random_uniform(50_000, 0..4),
        patterns::pipe_organ(10_000),
    ] {
        let result = quick_sort(&input);
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(result.sequence, expected);
    }
}

#[test]
fn counts_are_deterministic() {
    let input = patterns::random(1_000);
    for sort in SORTS {
        assert_eq!(sort(&input), sort(&input));
    }
}
