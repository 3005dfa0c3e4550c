//! Seed derivation and row resampling.
//!
//! Both use `rand`'s `StdRng`: output is reproducible for a given seed within
//! one `rand` release line, not across major versions.

use dagbench_types::{Dataset, DatasetError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Derive `count` per-resample seeds from one base seed.
///
/// Seed `k` depends only on `(seed, k)`, so it is fixed before any work is
/// dispatched and independent of completion order.
pub fn derive_seeds(seed: u64, count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen::<u64>()).collect()
}

/// Row indices of a bootstrap resample: `n_rows` draws, uniform, with
/// replacement.
pub fn resample_indices(n_rows: usize, seed: u64) -> Vec<usize> {
    if n_rows == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect()
}

/// A bootstrap resample of `data`: same columns, same row count, rows drawn
/// uniformly with replacement.
pub fn resample(data: &Dataset, seed: u64) -> Result<Dataset, DatasetError> {
    data.select_rows(&resample_indices(data.n_rows(), seed))
}
