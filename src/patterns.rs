//! Input shapes for the experiments, tests and benchmarks.
//!
//! Random shapes draw from a seed shared by the whole process, see [`get_or_init_rand_seed`].
//! The `*_seeded` variants take the seed explicitly.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// `1, 2, ..., len`
pub fn ascending(len: usize) -> Vec<i32> {
    (1..=len as i32).collect()
}

/// `len, len - 1, ..., 1`
pub fn descending(len: usize) -> Vec<i32> {
    (1..=len as i32).rev().collect()
}

pub fn all_equal(len: usize, value: i32) -> Vec<i32> {
    vec![value; len]
}

/// Uniformly distributed values in `range`. Panics if `range` is empty.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    random_uniform_seeded(len, range, get_or_init_rand_seed())
}

pub fn random_uniform_seeded(len: usize, range: Range<i32>, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::from(range);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipf distributed values in `1..=len`. Few values are very common, most are rare.
///
/// Panics if `exponent` is not positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    random_zipf_seeded(len, exponent, get_or_init_rand_seed())
}

pub fn random_zipf_seeded(len: usize, exponent: f64, seed: u64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf exponent {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `saw_count` ascending runs `0, 1, 2, ...` laid back to back.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    let saw_len = len.div_ceil(saw_count.max(1)).max(1);

    (0..len).map(|i| (i % saw_len) as i32).collect()
}

static SEED: OnceCell<u64> = OnceCell::new();

/// Returns the seed used by the unseeded random shapes.
///
/// Taken from the `OVERRIDE_SEED` environment variable if set, otherwise drawn at random. The
/// seed is fixed for the lifetime of the process and logged once so a failing run can be
/// reproduced.
pub fn get_or_init_rand_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("Ignoring OVERRIDE_SEED={raw:?}: {err}");
                thread_rng().gen()
            }),
            Err(_) => thread_rng().gen(),
        };

        log::info!("Seed: {seed}");
        seed
    })
}
