//! Reproducible train/test partitioning.
//!
//! The partition is drawn from a 32-bit Mersenne Twister (MT19937) with the
//! NumPy legacy seeding and shuffle. For a given length and seed this gives
//! the same split as scikit-learn's `train_test_split(..., random_state=seed)`.

use crate::error::{AnalyticsError, Result};
use rand::RngCore;

pub use rand_mt::Mt as Mt19937;

/// Seed of the forecaster's train/test split.
pub const SPLIT_SEED: u32 = 42;

/// Uniform integer in `[0, max]` by masked rejection sampling.
pub fn interval<R: RngCore + ?Sized>(rng: &mut R, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let mut mask = max;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    loop {
        let value = rng.next_u32() & mask;
        if value <= max {
            return value;
        }
    }
}

/// Random permutation of `0..n`.
///
/// Fisher-Yates from the last position down, each swap partner drawn with
/// [`interval`].
pub fn permutation<R: RngCore + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = interval(rng, i as u32) as usize;
        indices.swap(i, j);
    }
    indices
}

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n` with `seed` and split off `ceil(test_size * n)` test rows.
///
/// The test rows are the head of the permutation, the training rows the
/// remainder, both in permutation order.
pub fn train_test_split(n: usize, test_size: f64, seed: u32) -> Result<SplitIndices> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(AnalyticsError::InvalidParameter(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n_test = (test_size * n as f64).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(AnalyticsError::InsufficientData {
            needed: n_test + 1,
            got: n,
        });
    }

    let mut rng = Mt19937::new(seed);
    let mut indices = permutation(n, &mut rng);
    let train = indices.split_off(n_test);

    Ok(SplitIndices {
        train,
        test: indices,
    })
}
