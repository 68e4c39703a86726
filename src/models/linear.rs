//! Single-feature linear regression.

use crate::error::{AnalyticsError, Result};
use crate::utils::ols::{ols_fit, OLSResult};

/// Linear regression `y = slope * x + intercept` fitted by least squares.
///
/// # Example
///
/// ```
/// use consumption_analytics::models::LinearRegression;
///
/// let mut model = LinearRegression::new();
/// model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
///
/// let next = model.predict_one(4.0).unwrap();
/// assert!((next - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    fitted: Option<OLSResult>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the model, replacing any previous fit.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.fitted = Some(ols_fit(x, y)?);
        Ok(())
    }

    /// Predict a single value.
    pub fn predict_one(&self, x: f64) -> Result<f64> {
        self.fitted
            .as_ref()
            .map(|fit| fit.predict(x))
            .ok_or(AnalyticsError::FitRequired)
    }

    /// Predict one value per input.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let fit = self.fitted.as_ref().ok_or(AnalyticsError::FitRequired)?;
        Ok(x.iter().map(|&xi| fit.predict(xi)).collect())
    }

    pub fn slope(&self) -> Option<f64> {
        self.fitted.map(|fit| fit.slope)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.fitted.map(|fit| fit.intercept)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
