//! Numeric utilities shared by the analysis and forecasting components.

pub mod metrics;
pub mod ols;
pub mod split;
pub mod stats;

pub use metrics::{calculate_metrics, ModelMetrics};
pub use ols::{ols_fit, OLSResult};
pub use split::{interval, permutation, train_test_split, Mt19937, SplitIndices, SPLIT_SEED};
pub use stats::{mean, median, round_to, std_dev, variance};
