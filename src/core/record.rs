//! Record types: the raw rows a loader supplies and the typed rows the
//! pipeline works on.

use crate::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the date column.
pub const DATE_FIELD: &str = "date";
/// Name of the block identifier column.
pub const BLOCK_FIELD: &str = "hostel_block";

/// Resource whose consumption a series tracks.
///
/// Each resource reads its own consumption column from the raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Electricity, in kWh units (`units_consumed`).
    #[default]
    Electricity,
    /// Water, in liters (`liters_used`).
    Water,
}

impl Resource {
    /// Consumption column read for this resource.
    pub fn column(&self) -> &'static str {
        match self {
            Resource::Electricity => "units_consumed",
            Resource::Water => "liters_used",
        }
    }

    /// Display unit of the consumption values.
    pub fn unit(&self) -> &'static str {
        match self {
            Resource::Electricity => "kWh Units",
            Resource::Water => "Liters",
        }
    }

    /// Error reported when a series does not carry this resource's column.
    pub(crate) fn missing(&self) -> AnalyticsError {
        AnalyticsError::MissingField(self.column().to_string())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Electricity => write!(f, "electricity"),
            Resource::Water => write!(f, "water"),
        }
    }
}

impl FromStr for Resource {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electricity" | "units_consumed" => Ok(Resource::Electricity),
            "water" | "liters_used" => Ok(Resource::Water),
            other => Err(AnalyticsError::InvalidParameter(format!(
                "unknown resource '{}'",
                other
            ))),
        }
    }
}

/// One row as supplied by a loader, before validation.
///
/// Any field may be missing. Both consumption columns are optional so the
/// same row type serves electricity and water files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub hostel_block: Option<String>,
    #[serde(default)]
    pub units_consumed: Option<f64>,
    #[serde(default)]
    pub liters_used: Option<f64>,
}

impl RawRecord {
    /// Create a raw row carrying a consumption value for `resource`.
    pub fn new(date: &str, block: &str, resource: Resource, consumption: f64) -> Self {
        let mut raw = Self {
            date: Some(date.to_string()),
            hostel_block: Some(block.to_string()),
            ..Self::default()
        };
        raw.set_consumption(resource, Some(consumption));
        raw
    }

    /// Consumption value in the column of `resource`.
    pub fn consumption(&self, resource: Resource) -> Option<f64> {
        match resource {
            Resource::Electricity => self.units_consumed,
            Resource::Water => self.liters_used,
        }
    }

    pub fn set_consumption(&mut self, resource: Resource, value: Option<f64>) {
        match resource {
            Resource::Electricity => self.units_consumed = value,
            Resource::Water => self.liters_used = value,
        }
    }
}

/// A validated consumption reading for one block on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    #[serde(rename = "hostel_block")]
    pub block: String,
    pub consumption: f64,
}

impl Record {
    pub fn new(date: NaiveDate, block: impl Into<String>, consumption: f64) -> Self {
        Self {
            date,
            block: block.into(),
            consumption,
        }
    }

    /// Convert back into a raw row for `resource`.
    pub fn to_raw(&self, resource: Resource) -> RawRecord {
        let mut raw = RawRecord {
            date: Some(self.date.format("%Y-%m-%d").to_string()),
            hostel_block: Some(self.block.clone()),
            ..RawRecord::default()
        };
        raw.set_consumption(resource, Some(self.consumption));
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_columns_and_units() {
        assert_eq!(Resource::Electricity.column(), "units_consumed");
        assert_eq!(Resource::Water.column(), "liters_used");
        assert_eq!(Resource::Electricity.unit(), "kWh Units");
        assert_eq!(Resource::Water.unit(), "Liters");
        assert_eq!(Resource::default(), Resource::Electricity);
    }

    #[test]
    fn resource_parses_names_and_columns() {
        assert_eq!("Water".parse::<Resource>().unwrap(), Resource::Water);
        assert_eq!(
            "units_consumed".parse::<Resource>().unwrap(),
            Resource::Electricity
        );
        assert!(matches!(
            "gas".parse::<Resource>(),
            Err(AnalyticsError::InvalidParameter(_))
        ));
        assert_eq!(Resource::Water.to_string(), "water");
    }

    #[test]
    fn raw_record_routes_consumption_by_resource() {
        let raw = RawRecord::new("2024-01-01", "A", Resource::Water, 310.5);
        assert_eq!(raw.liters_used, Some(310.5));
        assert_eq!(raw.units_consumed, None);
        assert_eq!(raw.consumption(Resource::Water), Some(310.5));
        assert_eq!(raw.consumption(Resource::Electricity), None);
    }

    #[test]
    fn raw_record_deserializes_with_missing_columns() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"date": "2024-01-02", "hostel_block": "B"}"#).unwrap();
        assert_eq!(raw.date.as_deref(), Some("2024-01-02"));
        assert_eq!(raw.units_consumed, None);
        assert_eq!(raw.liters_used, None);
    }

    #[test]
    fn record_serializes_with_presentation_names() {
        let record = Record::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), "C", 42.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["hostel_block"], "C");
        assert_eq!(json["consumption"], 42.0);
    }

    #[test]
    fn record_to_raw_round_trips_fields() {
        let record = Record::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), "C", 42.0);
        let raw = record.to_raw(Resource::Electricity);
        assert_eq!(raw, RawRecord::new("2024-03-05", "C", Resource::Electricity, 42.0));
    }
}
