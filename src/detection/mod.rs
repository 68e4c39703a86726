//! Detection utilities for consumption series.
//!
//! This module flags readings that deviate from the series mean by more
//! than a configurable number of standard deviations.

mod anomaly;

pub use anomaly::{
    anomaly_bounds, anomaly_summary, detect_anomalies, AnomalyBounds, AnomalyRecord,
    AnomalySummary, AnomalyType, DEFAULT_THRESHOLD,
};
