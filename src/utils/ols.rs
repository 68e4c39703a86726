//! Ordinary Least Squares (OLS) fit of a single regressor.
//!
//! The trend forecaster regresses consumption on the day index, so only
//! the one-feature closed form is needed.

use crate::error::{AnalyticsError, Result};

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OLSResult {
    pub slope: f64,
    pub intercept: f64,
}

impl OLSResult {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope * x + intercept` by least squares.
///
/// Uses the centered closed form:
/// slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)², intercept = ȳ - slope * x̄.
/// When `x` has no spread the slope is 0 and the intercept is ȳ.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Result<OLSResult> {
    let n = y.len();

    if n == 0 {
        return Err(AnalyticsError::InsufficientData { needed: 1, got: 0 });
    }

    if x.len() != n {
        return Err(AnalyticsError::DimensionMismatch {
            expected: n,
            got: x.len(),
        });
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        ss_xx += dx * dx;
        ss_xy += dx * (yi - y_mean);
    }

    if ss_xx == 0.0 {
        return Ok(OLSResult {
            slope: 0.0,
            intercept: y_mean,
        });
    }

    let slope = ss_xy / ss_xx;
    Ok(OLSResult {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}
