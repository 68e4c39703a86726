//! End-to-end analysis of one consumption series.
//!
//! [`AnalysisConfig`] carries every choice a presentation layer makes
//! (resource, block, threshold, date window). [`analyze`] runs each
//! component independently and records a failed component as `None`.

use crate::analysis::{
    analyze_trends, calculate_statistics, compare_blocks, ComparisonTable, StatsSummary,
    TrendSummary,
};
use crate::core::{Resource, Series};
use crate::detection::{
    anomaly_bounds, anomaly_summary, detect_anomalies, AnomalyBounds, AnomalyRecord,
    AnomalySummary, DEFAULT_THRESHOLD,
};
use crate::error::{AnalyticsError, Result};
use crate::models::{predict_by_block, prediction_summary, PredictionTable};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    /// Consumption field to analyze.
    pub resource: Resource,
    /// Restrict to one block; `None` analyzes all blocks together.
    pub block: Option<String>,
    /// Anomaly threshold in standard deviations.
    pub threshold: f64,
    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub end_date: Option<NaiveDate>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            resource: Resource::Electricity,
            block: None,
            threshold: DEFAULT_THRESHOLD,
            start_date: None,
            end_date: None,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration for `resource`.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            ..Self::default()
        }
    }

    /// Analyze a single block.
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Set the anomaly threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Restrict to records dated within `[start, end]`.
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}

/// Output of every component for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub resource: Resource,
    pub unit: &'static str,
    pub block: Option<String>,
    pub record_count: usize,
    pub statistics: Option<StatsSummary>,
    pub trends: Option<TrendSummary>,
    pub anomaly_bounds: Option<AnomalyBounds>,
    pub anomalies: Option<Vec<AnomalyRecord>>,
    pub anomaly_summary: Option<AnomalySummary>,
    /// Present only when no block filter is set.
    pub comparison: Option<ComparisonTable>,
    /// Forecast per block: every block of the window, or only the
    /// selected one.
    pub prediction: Option<PredictionTable>,
}

impl AnalysisReport {
    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn optional<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(component, error = %err, "component produced no result");
            None
        }
    }
}

/// Run every analysis component over `series` as configured.
///
/// # Errors
/// * `MissingField` when `series` does not carry `config.resource`
/// * `EmptyData` when no records remain after date filtering
pub fn analyze(series: &Series, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let resource = config.resource;
    if series.resource() != resource {
        return Err(resource.missing());
    }

    let windowed = series.filter_by_date_range(config.start_date, config.end_date);
    if windowed.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }

    let block = config.block.as_deref().filter(|b| !b.is_empty());
    let selected = match block {
        Some(block) => windowed.filter_by_block(block),
        None => windowed.clone(),
    };

    info!(
        %resource,
        block = block.unwrap_or("all"),
        records = selected.len(),
        "analyzing consumption"
    );

    let anomalies = optional(
        "anomalies",
        detect_anomalies(&selected, resource, config.threshold),
    );
    let summary = anomalies.as_deref().map(anomaly_summary);

    let (comparison, prediction) = match block {
        Some(block) => (
            None,
            optional(
                "prediction",
                prediction_summary(&windowed, resource, Some(block))
                    .map(|summary| PredictionTable::from([(block.to_string(), summary)])),
            ),
        ),
        None => (
            optional("comparison", compare_blocks(&windowed, resource)),
            optional("prediction", predict_by_block(&windowed, resource)),
        ),
    };

    Ok(AnalysisReport {
        resource,
        unit: resource.unit(),
        block: block.map(str::to_string),
        record_count: selected.len(),
        statistics: optional("statistics", calculate_statistics(&selected, resource)),
        trends: optional("trends", analyze_trends(&selected, resource)),
        anomaly_bounds: optional(
            "anomaly_bounds",
            anomaly_bounds(&selected, resource, config.threshold),
        ),
        anomalies,
        anomaly_summary: summary,
        comparison,
        prediction,
    })
}
