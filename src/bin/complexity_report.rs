use std::env;
use std::process;

use counted_sort_rs::report::{self, InputKind, UnsortedOutput, SORT_ALGORITHMS};
use counted_sort_rs::{binary_search, linear_search};

const DEFAULT_SORT_SIZES: [usize; 3] = [100, 1_000, 10_000];
const SEARCH_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];
const SEARCH_TRIALS: usize = 10;
const SPECIAL_CASE_SIZE: usize = 1_000;

fn rule() {
    println!("\n{}", "=".repeat(70));
}

fn demonstrate_searches() {
    rule();
    println!("SEARCH DEMONSTRATION");

    let list = [3, 7, 12, 18, 23, 29, 34, 41, 50, 67];
    println!("\nList: {list:?}");

    for (label, target) in [("first", 3), ("middle", 23), ("last", 67), ("absent", 99)] {
        println!("\n  Target {target} ({label}):");
        for (name, result) in [
            ("linear_search", linear_search(&list, &target)),
            ("binary_search", binary_search(&list, &target)),
        ] {
            match result.index {
                Some(i) => println!(
                    "    {name}: found at index {i}, {} comparison(s)",
                    result.comparisons
                ),
                None => println!(
                    "    {name}: not found, {} comparison(s)",
                    result.comparisons
                ),
            }
        }
    }
}

fn compare_searches() {
    for len in SEARCH_SIZES {
        let summary = report::compare_searches(len, SEARCH_TRIALS);

        rule();
        println!("SEARCH COMPARISON - {} elements", summary.len);
        println!("\n  Mean over {} searches:", summary.trials);
        println!(
            "    linear_search [O(n)]:     {:.2} comparisons, {:?}",
            summary.mean_linear_comparisons, summary.mean_linear_elapsed
        );
        println!(
            "    binary_search [O(log n)]: {:.2} comparisons, {:?}",
            summary.mean_binary_comparisons, summary.mean_binary_elapsed
        );
        println!(
            "    {:.2}x fewer comparisons, {:.2}x faster",
            summary.comparison_reduction(),
            summary.speedup()
        );
        println!(
            "    expected: ~{:.2} linear, at most {} binary",
            report::linear_search_expected(summary.len),
            report::binary_search_bound(summary.len)
        );
    }
}

fn demonstrate_sorts() {
    rule();
    println!("SORT DEMONSTRATION");

    let list = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50];
    println!("\nList: {list:?}");

    for algorithm in &SORT_ALGORITHMS {
        let result = (algorithm.sort)(&list);
        println!("\n  {}:", algorithm.name);
        println!("    result:      {:?}", result.sequence);
        println!("    comparisons: {}", result.comparisons);
    }
}

fn compare_sorts(len: usize, kind: InputKind) -> Result<(), UnsortedOutput> {
    let comparison = report::compare_sorts(len, kind)?;

    rule();
    println!("SORT COMPARISON - {len} elements, {} input", kind.name());
    println!(
        "  reference: n log2 n = {:.0}, n(n-1)/2 = {}",
        report::n_log2_n(len),
        report::quadratic_comparisons(len)
    );

    for name in &comparison.skipped {
        println!("\n  {name}: skipped, too slow for {len} elements");
    }

    for measurement in &comparison.measurements {
        println!("\n  {} [{}]:", measurement.algorithm, measurement.complexity);
        println!("    comparisons: {}", measurement.comparisons);
        println!("    time:        {:?}", measurement.elapsed);
    }

    if comparison.measurements.len() > 1 {
        if let Some(fastest) = comparison.fastest() {
            println!("\n  fastest: {}", fastest.algorithm);
        }
        for (name, slowdown) in comparison.slowdowns() {
            println!("    {name} is {slowdown:.2}x slower");
        }
    }

    Ok(())
}

fn analyze_quick_sort() -> Result<(), UnsortedOutput> {
    let (random, sorted) = report::quick_sort_sorted_vs_random(SPECIAL_CASE_SIZE)?;

    rule();
    println!("QUICK SORT - RANDOM VS SORTED INPUT ({SPECIAL_CASE_SIZE} elements)");
    println!(
        "\n  random: {} comparisons, {:?}",
        random.comparisons, random.elapsed
    );
    println!(
        "  sorted: {} comparisons, {:?}",
        sorted.comparisons, sorted.elapsed
    );
    println!(
        "  sorted input needs {:.2}x the comparisons of random input",
        sorted.comparisons as f64 / random.comparisons.max(1) as f64
    );

    Ok(())
}

fn parse_sizes(args: &[String]) -> Option<Vec<usize>> {
    if args.is_empty() {
        return Some(DEFAULT_SORT_SIZES.to_vec());
    }

    args.iter().map(|arg| arg.parse().ok()).collect()
}

fn run(sort_sizes: &[usize]) -> Result<(), UnsortedOutput> {
    demonstrate_searches();
    compare_searches();

    demonstrate_sorts();
    for &len in sort_sizes {
        compare_sorts(len, InputKind::Random)?;
    }
    for kind in [InputKind::Ascending, InputKind::Descending] {
        compare_sorts(SPECIAL_CASE_SIZE, kind)?;
    }
    analyze_quick_sort()
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let Some(sort_sizes) = parse_sizes(&args) else {
        eprintln!("Usage: complexity_report [SORT_SIZE...]");
        process::exit(2);
    };

    println!(
        "Pattern seed: {} (set OVERRIDE_SEED to reproduce)",
        sort_test_tools::patterns::random_init_seed()
    );

    if let Err(err) = run(&sort_sizes) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
