//! Normalization of raw rows into a canonical [`Series`].

use crate::core::{RawRecord, Record, Resource, Series, BLOCK_FIELD, DATE_FIELD};
use crate::error::{AnalyticsError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date, discarding any time of day.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| AnalyticsError::TimestampError(format!("unrecognized date '{}'", value)))
}

/// Turn raw rows into the canonical series of `resource`.
///
/// Rows lacking a date, a block or a usable consumption value are dropped.
/// The survivors are sorted by (block, date) and deduplicated, keeping the
/// first row for each (block, date) pair. The input is left untouched.
///
/// # Errors
/// * `EmptyData` when `raw` is empty
/// * `MissingField` when no row carries the date, block or consumption column
/// * `TimestampError` when a present date cannot be parsed
pub fn preprocess(raw: &[RawRecord], resource: Resource) -> Result<Series> {
    if raw.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }

    if raw.iter().all(|r| r.date.is_none()) {
        return Err(AnalyticsError::MissingField(DATE_FIELD.to_string()));
    }
    if raw.iter().all(|r| r.hostel_block.is_none()) {
        return Err(AnalyticsError::MissingField(BLOCK_FIELD.to_string()));
    }
    if raw.iter().all(|r| r.consumption(resource).is_none()) {
        return Err(resource.missing());
    }

    let mut records = Vec::with_capacity(raw.len());
    for row in raw {
        let date = match row.date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => parse_date(value)?,
            _ => continue,
        };
        let Some(block) = row.hostel_block.as_ref() else {
            continue;
        };
        let consumption = match row.consumption(resource) {
            Some(value) if value.is_finite() && value >= 0.0 => value,
            _ => continue,
        };
        records.push(Record::new(date, block.clone(), consumption));
    }

    let dropped = raw.len() - records.len();
    if dropped > 0 {
        debug!(dropped, total = raw.len(), "dropped rows with missing fields");
    }

    let conflicts = count_conflicts(&records);
    if conflicts > 0 {
        warn!(
            conflicts,
            "rows share a (block, date) pair with different consumption; keeping the first"
        );
    }

    let parsed = records.len();
    let series = Series::from_records(resource, records);
    if series.len() < parsed {
        debug!(removed = parsed - series.len(), "removed duplicate rows");
    }

    Ok(series)
}

/// Rows whose (block, date) pair was already seen with another value.
fn count_conflicts(records: &[Record]) -> usize {
    let mut first_seen: HashMap<(&str, NaiveDate), f64> = HashMap::new();
    records
        .iter()
        .filter(|r| match first_seen.entry((r.block.as_str(), r.date)) {
            Entry::Occupied(entry) => *entry.get() != r.consumption,
            Entry::Vacant(entry) => {
                entry.insert(r.consumption);
                false
            }
        })
        .count()
}
