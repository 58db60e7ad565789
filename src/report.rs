//! Measurement helpers for the `complexity_report` binary.
//!
//! These only consume the public search and sort functions. Inputs come from
//! [`sort_test_tools::patterns`], latencies from [`Instant`], which is monotonic.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use sort_test_tools::patterns;

use crate::{SearchResult, SortResult};

/// Quadratic sorts are skipped for inputs larger than this.
pub const QUADRATIC_SIZE_LIMIT: usize = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Values drawn uniformly from `1..=10 * len`.
    Random,
    /// `0, 1, .., len - 1`.
    Ascending,
    /// `len, len - 1, .., 1`.
    Descending,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [
        InputKind::Random,
        InputKind::Ascending,
        InputKind::Descending,
    ];

    pub fn generate(self, len: usize) -> Vec<i32> {
        match self {
            InputKind::Random => {
                let upper = (len.max(1) * 10).min(i32::MAX as usize) as i32;
                patterns::random_uniform(len, 1..=upper)
            }
            InputKind::Ascending => patterns::ascending(len),
            InputKind::Descending => patterns::descending(len),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputKind::Random => "random",
            InputKind::Ascending => "ascending",
            InputKind::Descending => "descending",
        }
    }
}

pub struct Algorithm {
    pub name: &'static str,
    pub complexity: &'static str,
    pub quadratic: bool,
    pub sort: fn(&[i32]) -> SortResult<i32>,
}

pub static SORT_ALGORITHMS: [Algorithm; 4] = [
    Algorithm {
        name: "bubble_sort",
        complexity: "O(n^2)",
        quadratic: true,
        sort: crate::bubble_sort::<i32>,
    },
    Algorithm {
        name: "selection_sort",
        complexity: "O(n^2)",
        quadratic: true,
        sort: crate::selection_sort::<i32>,
    },
    Algorithm {
        name: "merge_sort",
        complexity: "O(n log n)",
        quadratic: false,
        sort: crate::merge_sort::<i32>,
    },
    Algorithm {
        name: "quick_sort",
        complexity: "O(n log n)",
        quadratic: false,
        sort: crate::quick_sort::<i32>,
    },
];

/// A sort produced output that differs from `slice::sort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsortedOutput {
    pub algorithm: &'static str,
    pub len: usize,
}

impl fmt::Display for UnsortedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} produced a wrong result for {} elements",
            self.algorithm, self.len
        )
    }
}

impl Error for UnsortedOutput {}

#[derive(Copy, Clone, Debug)]
pub struct SortMeasurement {
    pub algorithm: &'static str,
    pub complexity: &'static str,
    pub comparisons: u64,
    pub elapsed: Duration,
}

/// Runs `algorithm` once on `input` and checks the result against `slice::sort`.
pub fn measure_sort(
    algorithm: &Algorithm,
    input: &[i32],
) -> Result<SortMeasurement, UnsortedOutput> {
    let start = Instant::now();
    let result = (algorithm.sort)(input);
    let elapsed = start.elapsed();

    let mut expected = input.to_vec();
    expected.sort();
    if result.sequence != expected {
        return Err(UnsortedOutput {
            algorithm: algorithm.name,
            len: input.len(),
        });
    }

    Ok(SortMeasurement {
        algorithm: algorithm.name,
        complexity: algorithm.complexity,
        comparisons: result.comparisons,
        elapsed,
    })
}

#[derive(Clone, Debug)]
pub struct SortComparison {
    pub len: usize,
    pub kind: InputKind,
    pub measurements: Vec<SortMeasurement>,
    /// Algorithms left out because `len` exceeds [`QUADRATIC_SIZE_LIMIT`].
    pub skipped: Vec<&'static str>,
}

impl SortComparison {
    pub fn fastest(&self) -> Option<&SortMeasurement> {
        self.measurements.iter().min_by_key(|m| m.elapsed)
    }

    /// How many times slower than the fastest each other algorithm was.
    pub fn slowdowns(&self) -> Vec<(&'static str, f64)> {
        let Some(fastest) = self.fastest() else {
            return Vec::new();
        };
        let base = fastest.elapsed.as_secs_f64();

        self.measurements
            .iter()
            .filter(|m| m.algorithm != fastest.algorithm)
            .map(|m| (m.algorithm, ratio(m.elapsed.as_secs_f64(), base)))
            .collect()
    }
}

/// Runs every sort on one generated input of `len` elements.
pub fn compare_sorts(len: usize, kind: InputKind) -> Result<SortComparison, UnsortedOutput> {
    let input = kind.generate(len);
    let mut measurements = Vec::new();
    let mut skipped = Vec::new();

    for algorithm in &SORT_ALGORITHMS {
        if algorithm.quadratic && len > QUADRATIC_SIZE_LIMIT {
            skipped.push(algorithm.name);
            continue;
        }
        measurements.push(measure_sort(algorithm, &input)?);
    }

    Ok(SortComparison {
        len,
        kind,
        measurements,
        skipped,
    })
}

/// Averages over repeated searches for targets known to be present.
#[derive(Copy, Clone, Debug)]
pub struct SearchSummary {
    pub len: usize,
    pub trials: usize,
    pub mean_linear_comparisons: f64,
    pub mean_binary_comparisons: f64,
    pub mean_linear_elapsed: Duration,
    pub mean_binary_elapsed: Duration,
}

impl SearchSummary {
    pub fn comparison_reduction(&self) -> f64 {
        ratio(self.mean_linear_comparisons, self.mean_binary_comparisons)
    }

    pub fn speedup(&self) -> f64 {
        ratio(
            self.mean_linear_elapsed.as_secs_f64(),
            self.mean_binary_elapsed.as_secs_f64(),
        )
    }
}

fn timed_search(search: impl FnOnce() -> SearchResult) -> (SearchResult, Duration) {
    let start = Instant::now();
    let result = search();
    (result, start.elapsed())
}

/// Searches a sorted list of distinct values, roughly `len` long, for `trials` of its elements
/// with both searches.
pub fn compare_searches(len: usize, trials: usize) -> SearchSummary {
    let upper = (len.max(1) * 10).min(i32::MAX as usize) as i32;
    let mut list = patterns::random_uniform(len, 0..upper);
    list.sort_unstable();
    list.dedup();

    let targets: Vec<i32> = if list.is_empty() {
        Vec::new()
    } else {
        patterns::random_uniform(trials, 0..list.len() as i32)
            .into_iter()
            .map(|i| list[i as usize])
            .collect()
    };

    let mut linear_comparisons = 0;
    let mut binary_comparisons = 0;
    let mut linear_elapsed = Duration::ZERO;
    let mut binary_elapsed = Duration::ZERO;

    for target in &targets {
        let (linear, elapsed) = timed_search(|| crate::linear_search(&list, target));
        linear_comparisons += linear.comparisons;
        linear_elapsed += elapsed;

        let (binary, elapsed) = timed_search(|| crate::binary_search(&list, target));
        binary_comparisons += binary.comparisons;
        binary_elapsed += elapsed;
    }

    let n = targets.len().max(1);
    SearchSummary {
        len: list.len(),
        trials: targets.len(),
        mean_linear_comparisons: linear_comparisons as f64 / n as f64,
        mean_binary_comparisons: binary_comparisons as f64 / n as f64,
        mean_linear_elapsed: linear_elapsed / n as u32,
        mean_binary_elapsed: binary_elapsed / n as u32,
    }
}

/// Quicksort on random versus already sorted input of the same length.
pub fn quick_sort_sorted_vs_random(
    len: usize,
) -> Result<(SortMeasurement, SortMeasurement), UnsortedOutput> {
    let quick_sort = &SORT_ALGORITHMS[3];
    let random = measure_sort(quick_sort, &InputKind::Random.generate(len))?;
    let sorted = measure_sort(quick_sort, &InputKind::Ascending.generate(len))?;
    Ok((random, sorted))
}

fn ratio(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        f64::NAN
    } else {
        a / b
    }
}

/// Average case linear search cost, `n / 2`.
pub fn linear_search_expected(n: usize) -> f64 {
    n as f64 / 2.0
}

/// Worst case binary search cost, `ceil(log2(n + 1))`.
pub fn binary_search_bound(n: usize) -> u64 {
    (usize::BITS - n.leading_zeros()) as u64
}

pub fn n_log2_n(n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        n as f64 * (n as f64).log2()
    }
}

/// Comparisons of a full quadratic sort, `n * (n - 1) / 2`.
pub fn quadratic_comparisons(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}
