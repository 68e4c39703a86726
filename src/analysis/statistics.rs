//! Descriptive statistics of a consumption series.

use crate::core::{Resource, Series};
use crate::error::Result;
use crate::utils::stats;
use serde::Serialize;

/// Summary statistics of consumption values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1); NaN for a single record.
    pub std_dev: f64,
    pub total: f64,
    pub count: usize,
}

/// Compute summary statistics of the consumption values in `series`.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` when `series` has no records
pub fn calculate_statistics(series: &Series, resource: Resource) -> Result<StatsSummary> {
    series.ensure(resource)?;

    let values = series.values();

    Ok(StatsSummary {
        average: stats::mean(&values),
        maximum: stats::maximum(&values),
        minimum: stats::minimum(&values),
        median: stats::median(&values),
        std_dev: stats::std_dev(&values),
        total: values.iter().sum(),
        count: values.len(),
    })
}
