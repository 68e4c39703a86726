//! # consumption-analytics
//!
//! Analytics for per-block utility consumption (electricity, water).
//!
//! Turns loader rows into a canonical series, then computes descriptive
//! statistics, flags anomalous readings with a standard-deviation
//! threshold, summarizes day-over-day trends, compares blocks, and
//! forecasts upcoming consumption with a linear trend over the day index.
//!
//! # Example
//!
//! ```
//! use consumption_analytics::prelude::*;
//!
//! let rows: Vec<RawRecord> = [120.0, 125.0, 119.0, 131.0, 128.0, 135.0, 140.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| RawRecord::new(&format!("2024-03-{:02}", i + 1), "A", Resource::Electricity, v))
//!     .collect();
//!
//! let series = preprocess(&rows, Resource::Electricity).unwrap();
//! let report = analyze(&series, &AnalysisConfig::new(Resource::Electricity)).unwrap();
//!
//! let forecasts = report.prediction.unwrap();
//! assert_eq!(forecasts["A"].next_week_predictions.len(), 7);
//! ```

pub mod analysis;
pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use error::{AnalyticsError, Result};

pub mod prelude {
    pub use crate::analysis::{
        analyze_trends, calculate_statistics, compare_blocks, ComparisonTable, StatsSummary,
        TrendSummary,
    };
    pub use crate::core::{RawRecord, Record, Resource, Series};
    pub use crate::detection::{
        anomaly_summary, detect_anomalies, AnomalyRecord, AnomalySummary, AnomalyType,
        DEFAULT_THRESHOLD,
    };
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::models::{
        predict_by_block, prediction_summary, PredictionSummary, PredictionTable, TrendDirection,
    };
    pub use crate::pipeline::{analyze, AnalysisConfig, AnalysisReport};
    pub use crate::transform::preprocess;
    pub use crate::utils::ModelMetrics;
}
