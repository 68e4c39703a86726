//! Forecasting models for consumption series.
//!
//! A least-squares trend line over the day index drives the next-day and
//! week-ahead predictions.

pub mod linear;
pub mod prediction;

pub use linear::LinearRegression;
pub use prediction::{
    predict_by_block, predict_multiple_days, predict_next_day, prediction_summary, prepare_data,
    train_model, PredictionSummary, PredictionTable, TrendDirection, MIN_SPLIT_LEN, TEST_SIZE,
    WEEK_HORIZON,
};
