//! Next-day and week-ahead consumption forecasts.
//!
//! Consumption is regressed on a 1-based day index. Series longer than
//! [`MIN_SPLIT_LEN`] hold out `ceil(0.2 * n)` records, chosen by the
//! permutation seeded with [`SPLIT_SEED`], and report metrics on them.
//! Shorter series are trained and evaluated on every record.

use crate::core::{Resource, Series};
use crate::error::{AnalyticsError, Result};
use crate::models::LinearRegression;
use crate::utils::metrics::{calculate_metrics, ModelMetrics};
use crate::utils::split::{train_test_split, SPLIT_SEED};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Fraction of records held out for evaluation.
pub const TEST_SIZE: f64 = 0.2;
/// Series of at most this many records are not split.
pub const MIN_SPLIT_LEN: usize = 5;
/// Number of days in the week-ahead forecast.
pub const WEEK_HORIZON: usize = 7;

/// Direction of the next-day prediction relative to the last reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// Forecast of upcoming consumption with fit quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub model_metrics: ModelMetrics,
    pub last_actual_value: f64,
    pub next_day_prediction: f64,
    /// Predictions for the next [`WEEK_HORIZON`] days, in order.
    pub next_week_predictions: Vec<f64>,
    pub trend_direction: TrendDirection,
    pub predicted_change: f64,
}

/// Build the regression inputs: day index `1..=n` and consumption values,
/// in date order.
pub fn prepare_data(series: &Series, resource: Resource) -> Result<(Vec<f64>, Vec<f64>)> {
    series.ensure(resource)?;

    let y: Vec<f64> = series
        .sorted_by_date()
        .iter()
        .map(|r| r.consumption)
        .collect();
    let x: Vec<f64> = (1..=y.len()).map(|i| i as f64).collect();

    Ok((x, y))
}

/// Fit a linear model and evaluate it.
///
/// More than [`MIN_SPLIT_LEN`] samples are split into train and test sets;
/// otherwise the model is trained and evaluated on all samples.
pub fn train_model(x: &[f64], y: &[f64]) -> Result<(LinearRegression, ModelMetrics)> {
    if x.is_empty() || y.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }
    if x.len() != y.len() {
        return Err(AnalyticsError::DimensionMismatch {
            expected: y.len(),
            got: x.len(),
        });
    }

    let (x_train, x_test, y_train, y_test) = if x.len() > MIN_SPLIT_LEN {
        let split = train_test_split(x.len(), TEST_SIZE, SPLIT_SEED)?;
        debug!(
            train = split.train.len(),
            test = split.test.len(),
            "holding out test records"
        );
        let pick = |values: &[f64], rows: &[usize]| -> Vec<f64> {
            rows.iter().map(|&i| values[i]).collect()
        };
        (
            pick(x, &split.train),
            pick(x, &split.test),
            pick(y, &split.train),
            pick(y, &split.test),
        )
    } else {
        debug!(samples = x.len(), "too few records to hold out; evaluating in-sample");
        (x.to_vec(), x.to_vec(), y.to_vec(), y.to_vec())
    };

    let mut model = LinearRegression::new();
    model.fit(&x_train, &y_train)?;

    let y_pred = model.predict(&x_test)?;
    let metrics = calculate_metrics(&y_test, &y_pred)?;

    Ok((model, metrics))
}

/// Predict consumption for the day after `last_day_index`.
pub fn predict_next_day(model: &LinearRegression, last_day_index: usize) -> Result<f64> {
    model.predict_one((last_day_index + 1) as f64)
}

/// Predict consumption for the `num_days` days after `last_day_index`.
pub fn predict_multiple_days(
    model: &LinearRegression,
    last_day_index: usize,
    num_days: usize,
) -> Result<Vec<f64>> {
    let future: Vec<f64> = (1..=num_days)
        .map(|step| (last_day_index + step) as f64)
        .collect();
    model.predict(&future)
}

/// Forecasts keyed by block name.
pub type PredictionTable = BTreeMap<String, PredictionSummary>;

/// Full forecast: fit on `series` (optionally one block) and predict ahead.
///
/// An empty block name means no block filter.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` when nothing is left after block filtering
pub fn prediction_summary(
    series: &Series,
    resource: Resource,
    block: Option<&str>,
) -> Result<PredictionSummary> {
    let filtered;
    let series = match block.filter(|b| !b.is_empty()) {
        Some(block) => {
            filtered = series.filter_by_block(block);
            &filtered
        }
        None => series,
    };

    let (x, y) = prepare_data(series, resource)?;
    let (model, model_metrics) = train_model(&x, &y)?;

    let last_day_index = x.len();
    let last_actual_value = y[y.len() - 1];
    let next_day_prediction = predict_next_day(&model, last_day_index)?;
    let next_week_predictions = predict_multiple_days(&model, last_day_index, WEEK_HORIZON)?;

    debug!(
        slope = ?model.slope(),
        intercept = ?model.intercept(),
        r2 = model_metrics.r2_score,
        "fitted consumption trend"
    );

    let trend_direction = if next_day_prediction > last_actual_value {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    Ok(PredictionSummary {
        model_metrics,
        last_actual_value,
        next_day_prediction,
        next_week_predictions,
        trend_direction,
        predicted_change: next_day_prediction - last_actual_value,
    })
}

/// Forecast every block of `series` separately.
///
/// # Errors
/// * `MissingField` when `series` does not carry `resource`
/// * `EmptyData` for an empty series
pub fn predict_by_block(series: &Series, resource: Resource) -> Result<PredictionTable> {
    series.ensure(resource)?;

    series
        .blocks()
        .into_iter()
        .map(|block| -> Result<(String, PredictionSummary)> {
            let summary = prediction_summary(series, resource, Some(block))?;
            Ok((block.to_string(), summary))
        })
        .collect()
}
