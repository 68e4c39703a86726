//! Canonical consumption series.

use super::record::{RawRecord, Record, Resource};
use crate::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Consumption records for one resource, in canonical order.
///
/// Records are sorted ascending by (block, date) and no (block, date) pair
/// occurs twice. Every constructor enforces this, so filtered or truncated
/// series stay canonical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    resource: Resource,
    records: Vec<Record>,
}

impl Series {
    /// Build a series from records in any order.
    ///
    /// Sorting is stable, so when several records share a (block, date)
    /// pair the one that came first in `records` is kept.
    pub fn from_records(resource: Resource, mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.block.cmp(&b.block).then(a.date.cmp(&b.date)));
        records.dedup_by(|later, kept| later.block == kept.block && later.date == kept.date);
        Self { resource, records }
    }

    /// Create an empty series.
    pub fn empty(resource: Resource) -> Self {
        Self {
            resource,
            records: Vec::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that the series carries `resource` and has at least one record.
    pub fn ensure(&self, resource: Resource) -> Result<()> {
        if self.resource != resource {
            return Err(resource.missing());
        }
        if self.records.is_empty() {
            return Err(AnalyticsError::EmptyData);
        }
        Ok(())
    }

    /// Consumption values in canonical order.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.consumption).collect()
    }

    /// Distinct block identifiers, sorted.
    pub fn blocks(&self) -> Vec<&str> {
        let mut blocks: Vec<&str> = self.records.iter().map(|r| r.block.as_str()).collect();
        blocks.dedup();
        blocks
    }

    /// Records ordered by date alone.
    ///
    /// Records on the same date keep their canonical (block) order.
    pub fn sorted_by_date(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.date);
        sorted
    }

    /// Records of a single block.
    pub fn filter_by_block(&self, block: &str) -> Series {
        Series {
            resource: self.resource,
            records: self
                .records
                .iter()
                .filter(|r| r.block == block)
                .cloned()
                .collect(),
        }
    }

    /// Records dated within `[start, end]`. A missing bound is open.
    pub fn filter_by_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Series {
        Series {
            resource: self.resource,
            records: self
                .records
                .iter()
                .filter(|r| start.map_or(true, |s| r.date >= s) && end.map_or(true, |e| r.date <= e))
                .cloned()
                .collect(),
        }
    }

    /// The last `n` records in canonical order.
    pub fn latest(&self, n: usize) -> Series {
        let start = self.records.len().saturating_sub(n);
        Series {
            resource: self.resource,
            records: self.records[start..].to_vec(),
        }
    }

    /// Convert back into raw rows, e.g. to feed the preprocessor again.
    pub fn to_raw(&self) -> Vec<RawRecord> {
        self.records
            .iter()
            .map(|r| r.to_raw(self.resource))
            .collect()
    }
}
