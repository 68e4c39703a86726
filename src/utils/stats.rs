//! Statistical utility functions.
//!
//! Every analysis component computes its moments through these helpers so
//! that the statistics summary and the anomaly bounds always agree.

fn all_equal(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Calculate the mean of a slice.
///
/// The result is kept within `[min, max]`, so an all-equal slice returns
/// its value exactly.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    if all_equal(values) {
        return values[0];
    }

    let m = values.iter().sum::<f64>() / values.len() as f64;
    let (lo, hi) = (minimum(values), maximum(values));
    if m < lo {
        lo
    } else if m > hi {
        hi
    } else {
        m
    }
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
///
/// Zero for an all-equal slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    if all_equal(values) {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Calculate the standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Calculate the median of a slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Largest value, NaN for an empty slice.
pub fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

/// Smallest value, NaN for an empty slice.
pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}

/// Drop NaN entries. Infinities are kept.
fn present(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Mean ignoring NaN entries.
pub fn nan_mean(values: &[f64]) -> f64 {
    mean(&present(values))
}

/// Maximum ignoring NaN entries.
pub fn nan_max(values: &[f64]) -> f64 {
    maximum(&present(values))
}

/// Minimum ignoring NaN entries.
pub fn nan_min(values: &[f64]) -> f64 {
    minimum(&present(values))
}

/// Round to `decimals` places, resolving ties to the even neighbour.
///
/// Scales by 10^decimals, rounds half-to-even, then scales back.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
