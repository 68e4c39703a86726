//! Scaling of consumption values.

use crate::core::{Resource, Series};
use crate::error::Result;
use crate::utils::stats::{maximum, minimum};

/// Min-max normalize consumption values to [0, 1].
///
/// x_scaled = (x - min) / (max - min)
///
/// Returns `Ok(None)` when every value is equal, since the range is zero
/// and no normalized column can be derived.
pub fn normalize_consumption(series: &Series, resource: Resource) -> Result<Option<Vec<f64>>> {
    series.ensure(resource)?;

    let values = series.values();
    let min = minimum(&values);
    let range = maximum(&values) - min;

    if range <= 0.0 {
        return Ok(None);
    }

    Ok(Some(values.iter().map(|&x| (x - min) / range).collect()))
}
