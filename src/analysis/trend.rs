//! Day-over-day trend analysis.

use crate::core::{Resource, Series};
use crate::error::{AnalyticsError, Result};
use crate::utils::stats::{nan_max, nan_mean, nan_min};
use serde::Serialize;

/// Aggregate day-over-day movement of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    pub average_daily_change: f64,
    pub max_increase: f64,
    pub max_decrease: f64,
    pub average_pct_change: f64,
    /// Last value exceeds the first.
    pub is_increasing: bool,
}

/// Step differences `x[i] - x[i-1]`, NaN at position 0.
pub fn daily_changes(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    std::iter::once(f64::NAN)
        .chain(values.windows(2).map(|w| w[1] - w[0]))
        .collect()
}

/// Percent changes `(x[i] - x[i-1]) / x[i-1] * 100`, NaN at position 0.
///
/// A zero predecessor gives ±inf, or NaN when the value stays at zero.
pub fn pct_changes(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    std::iter::once(f64::NAN)
        .chain(values.windows(2).map(|w| (w[1] - w[0]) / w[0] * 100.0))
        .collect()
}

/// Analyze consumption trends over time.
///
/// Records are ordered by date; records sharing a date keep their block
/// order. Aggregates skip undefined (NaN) steps.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` for an empty series
/// * `InsufficientData` for a single record
pub fn analyze_trends(series: &Series, resource: Resource) -> Result<TrendSummary> {
    series.ensure(resource)?;
    if series.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }

    let values: Vec<f64> = series
        .sorted_by_date()
        .iter()
        .map(|r| r.consumption)
        .collect();

    let diffs = daily_changes(&values);
    let pcts = pct_changes(&values);

    Ok(TrendSummary {
        average_daily_change: nan_mean(&diffs),
        max_increase: nan_max(&diffs),
        max_decrease: nan_min(&diffs),
        average_pct_change: nan_mean(&pcts),
        is_increasing: values[values.len() - 1] > values[0],
    })
}
