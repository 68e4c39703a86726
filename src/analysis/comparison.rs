//! Per-block comparison of consumption.

use crate::core::{Resource, Series};
use crate::error::Result;
use crate::utils::stats::{self, round_to};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregates of one block, floats rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockSummary {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub total: f64,
    pub count: usize,
}

/// Block identifier to block aggregates, ordered by block identifier.
pub type ComparisonTable = BTreeMap<String, BlockSummary>;

/// Compare consumption between blocks.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` for an empty series
pub fn compare_blocks(series: &Series, resource: Resource) -> Result<ComparisonTable> {
    series.ensure(resource)?;

    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in series.records() {
        grouped
            .entry(record.block.as_str())
            .or_default()
            .push(record.consumption);
    }

    Ok(grouped
        .into_iter()
        .map(|(block, values)| {
            let summary = BlockSummary {
                average: round_to(stats::mean(&values), 2),
                maximum: round_to(stats::maximum(&values), 2),
                minimum: round_to(stats::minimum(&values), 2),
                total: round_to(values.iter().sum(), 2),
                count: values.len(),
            };
            (block.to_string(), summary)
        })
        .collect())
}
