//! Input sequence generators.
//!
//! All generators draw from a [`StdRng`] seeded with [`random_init_seed`], so a whole test or
//! report run can be reproduced by setting `OVERRIDE_SEED`.

use std::env;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
    Ok(seed) => seed
        .parse()
        .expect("OVERRIDE_SEED must be an unsigned 64 bit integer"),
    Err(_) => thread_rng().gen(),
});

/// Seed shared by every generator in this process.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed values drawn from `range`, e.g. `0..2` or `1..=100`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipf distributed values in `1..=len`, many duplicates of the small values.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("len and exponent must be positive");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Sorted prefix of `sorted_percent` percent of the elements, random tail.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `len, len - 1, .., 1`.
pub fn descending(len: usize) -> Vec<i32> {
    (1..=len as i32).rev().collect()
}

/// Random values cut into `saw_count` runs, alternately sorted ascending and descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 || saw_count == 0 {
        return v;
    }

    let chunk_len = (len / saw_count).max(1);
    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let mid = len / 2;
    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by(|a, b| b.cmp(a));
    v
}
