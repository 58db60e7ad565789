use counted_sort_rs::report::{self, InputKind, QUADRATIC_SIZE_LIMIT, SORT_ALGORITHMS};

#[test]
fn inputs_have_requested_shape() {
    for len in [0, 1, 10, 1_000] {
        for kind in InputKind::ALL {
            assert_eq!(kind.generate(len).len(), len);
        }

        let random = InputKind::Random.generate(len);
        assert!(random.iter().all(|&x| x >= 1 && x <= (10 * len) as i32));

        assert!(InputKind::Ascending.generate(len).windows(2).all(|w| w[0] < w[1]));
        assert!(InputKind::Descending.generate(len).windows(2).all(|w| w[0] > w[1]));
    }
}

#[test]
fn compare_sorts_runs_every_algorithm() {
    let comparison = report::compare_sorts(500, InputKind::Random).unwrap();
    assert_eq!(comparison.measurements.len(), SORT_ALGORITHMS.len());
    assert!(comparison.skipped.is_empty());

    let selection = comparison
        .measurements
        .iter()
        .find(|m| m.algorithm == "selection_sort")
        .unwrap();
    assert_eq!(selection.comparisons, report::quadratic_comparisons(500));

    assert!(comparison.fastest().is_some());
    assert_eq!(comparison.slowdowns().len(), SORT_ALGORITHMS.len() - 1);
}

#[test]
fn compare_sorts_skips_quadratic_on_large_input() {
    let comparison =
        report::compare_sorts(QUADRATIC_SIZE_LIMIT + 1, InputKind::Ascending).unwrap();
    assert_eq!(comparison.skipped, vec!["bubble_sort", "selection_sort"]);
    assert_eq!(comparison.measurements.len(), 2);
}

#[test]
fn compare_searches_averages() {
    let summary = report::compare_searches(1_000, 10);
    assert_eq!(summary.trials, 10);
    assert!(summary.mean_linear_comparisons >= 1.0);
    assert!(summary.mean_binary_comparisons >= 1.0);
    assert!(summary.mean_binary_comparisons <= report::binary_search_bound(summary.len) as f64);
}

#[test]
fn quick_sort_sorted_input_is_not_degenerate() {
    let (random, sorted) = report::quick_sort_sorted_vs_random(1_000).unwrap();
    assert!(sorted.comparisons < 3 * random.comparisons);
}

#[test]
fn reference_values() {
    assert_eq!(report::binary_search_bound(0), 0);
    assert_eq!(report::binary_search_bound(1), 1);
    assert_eq!(report::binary_search_bound(10), 4);
    assert_eq!(report::binary_search_bound(1_023), 10);
    assert_eq!(report::binary_search_bound(1_024), 11);

    assert_eq!(report::quadratic_comparisons(0), 0);
    assert_eq!(report::quadratic_comparisons(5), 10);

    assert_eq!(report::n_log2_n(0), 0.0);
    assert!((report::n_log2_n(8) - 24.0).abs() < 1e-9);
    assert_eq!(report::linear_search_expected(10), 5.0);
}
