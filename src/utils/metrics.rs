//! Goodness-of-fit metrics for regression predictions.

use crate::error::{AnalyticsError, Result};
use serde::Serialize;

/// Fit-quality metrics of a regression model on held-out data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelMetrics {
    /// Coefficient of determination
    pub r2_score: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
}

/// Calculate regression metrics between actual and predicted values.
///
/// R² is NaN for fewer than two samples. When the actual values are
/// constant R² is 1.0 for a perfect prediction and 0.0 otherwise.
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<ModelMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }

    if actual.len() != predicted.len() {
        return Err(AnalyticsError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let n = actual.len() as f64;

    let mae: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n;

    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    let mse = ss_res / n;
    let rmse = mse.sqrt();

    let r2_score = if actual.len() < 2 {
        f64::NAN
    } else {
        let mean_actual = actual.iter().sum::<f64>() / n;
        let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
        if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        }
    };

    Ok(ModelMetrics {
        r2_score,
        mse,
        rmse,
        mae,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let metrics = calculate_metrics(&actual, &actual).unwrap();

        assert_relative_eq!(metrics.mae, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.r2_score, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn known_errors() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 2.0];
        let metrics = calculate_metrics(&actual, &predicted).unwrap();

        // errors: -1, 0, 1
        assert_relative_eq!(metrics.mae, 2.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 2.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, (2.0_f64 / 3.0).sqrt(), epsilon = 1e-10);
        // predicting the mean explains nothing
        assert_relative_eq!(metrics.r2_score, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn r2_can_be_negative() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![3.0, 2.0, 1.0];
        let metrics = calculate_metrics(&actual, &predicted).unwrap();
        assert_relative_eq!(metrics.r2_score, -3.0, epsilon = 1e-10);
    }

    #[test]
    fn r2_with_constant_actuals() {
        let actual = vec![4.0, 4.0];
        let exact = calculate_metrics(&actual, &[4.0, 4.0]).unwrap();
        assert_eq!(exact.r2_score, 1.0);

        let off = calculate_metrics(&actual, &[4.0, 5.0]).unwrap();
        assert_eq!(off.r2_score, 0.0);
    }

    #[test]
    fn r2_undefined_for_single_sample() {
        let metrics = calculate_metrics(&[3.0], &[2.5]).unwrap();
        assert!(metrics.r2_score.is_nan());
        assert_relative_eq!(metrics.mae, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn empty_and_mismatched_inputs() {
        assert_eq!(calculate_metrics(&[], &[]), Err(AnalyticsError::EmptyData));
        assert_eq!(
            calculate_metrics(&[1.0, 2.0], &[1.0]),
            Err(AnalyticsError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }
}
