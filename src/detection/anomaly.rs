//! Threshold-based anomaly detection.
//!
//! A reading is anomalous when it lies more than `threshold` sample
//! standard deviations away from the mean of the whole input series.

use crate::core::{Record, Resource, Series};
use crate::error::{AnalyticsError, Result};
use crate::utils::stats;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Default number of standard deviations before a reading is flagged.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Classification of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnomalyType {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "High Usage")]
    HighUsage,
    #[serde(rename = "Low Usage")]
    LowUsage,
}

impl AnomalyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::Normal => "Normal",
            AnomalyType::HighUsage => "High Usage",
            AnomalyType::LowUsage => "Low Usage",
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record with its anomaly classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyRecord {
    #[serde(flatten)]
    pub record: Record,
    pub is_anomaly: bool,
    pub anomaly_type: AnomalyType,
}

/// Bounds a series was classified against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnomalyBounds {
    pub mean: f64,
    pub std_dev: f64,
    pub upper: f64,
    pub lower: f64,
    pub threshold: f64,
}

impl AnomalyBounds {
    /// Classify a value. Values exactly on a bound are normal, and NaN
    /// bounds (single-record series) never flag anything.
    pub fn classify(&self, value: f64) -> AnomalyType {
        if value > self.upper {
            AnomalyType::HighUsage
        } else if value < self.lower {
            AnomalyType::LowUsage
        } else {
            AnomalyType::Normal
        }
    }
}

/// Counts over a set of classified records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnomalySummary {
    pub total_records: usize,
    pub anomaly_count: usize,
    pub anomaly_percentage: f64,
    pub high_usage_count: usize,
    pub low_usage_count: usize,
}

/// Compute `mean ± threshold * std_dev` over the whole series.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` for an empty series
/// * `InvalidParameter` for a negative or non-finite threshold
pub fn anomaly_bounds(series: &Series, resource: Resource, threshold: f64) -> Result<AnomalyBounds> {
    series.ensure(resource)?;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AnalyticsError::InvalidParameter(format!(
            "threshold must be a non-negative number, got {}",
            threshold
        )));
    }

    let values = series.values();
    let mean = stats::mean(&values);
    let std_dev = stats::std_dev(&values);

    Ok(AnomalyBounds {
        mean,
        std_dev,
        upper: mean + threshold * std_dev,
        lower: mean - threshold * std_dev,
        threshold,
    })
}

/// Classify every record of `series`, preserving its order.
pub fn detect_anomalies(
    series: &Series,
    resource: Resource,
    threshold: f64,
) -> Result<Vec<AnomalyRecord>> {
    let bounds = anomaly_bounds(series, resource, threshold)?;

    let records: Vec<AnomalyRecord> = series
        .records()
        .iter()
        .map(|record| {
            let anomaly_type = bounds.classify(record.consumption);
            AnomalyRecord {
                record: record.clone(),
                is_anomaly: anomaly_type != AnomalyType::Normal,
                anomaly_type,
            }
        })
        .collect();

    debug!(
        upper = bounds.upper,
        lower = bounds.lower,
        flagged = records.iter().filter(|r| r.is_anomaly).count(),
        "classified consumption readings"
    );

    Ok(records)
}

/// Summarize classified records.
pub fn anomaly_summary(records: &[AnomalyRecord]) -> AnomalySummary {
    let total_records = records.len();
    let count = |kind: AnomalyType| records.iter().filter(|r| r.anomaly_type == kind).count();
    let high_usage_count = count(AnomalyType::HighUsage);
    let low_usage_count = count(AnomalyType::LowUsage);
    let anomaly_count = records.iter().filter(|r| r.is_anomaly).count();

    let anomaly_percentage = if total_records == 0 {
        0.0
    } else {
        anomaly_count as f64 / total_records as f64 * 100.0
    };

    AnomalySummary {
        total_records,
        anomaly_count,
        anomaly_percentage,
        high_usage_count,
        low_usage_count,
    }
}
