//! Calendar features derived from record dates.

use crate::core::Series;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Calendar breakdown of one record's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeFeatures {
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Monday".
    pub day_of_week: String,
    pub day_of_month: u32,
    pub month: u32,
    pub year: i32,
}

impl TimeFeatures {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week: date.format("%A").to_string(),
            day_of_month: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Calendar features for every record, in canonical order.
pub fn time_features(series: &Series) -> Vec<TimeFeatures> {
    series
        .records()
        .iter()
        .map(|r| TimeFeatures::from_date(r.date))
        .collect()
}
