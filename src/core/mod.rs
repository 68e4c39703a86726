//! Core data structures for consumption series.

mod record;
mod series;

pub use record::{RawRecord, Record, Resource, BLOCK_FIELD, DATE_FIELD};
pub use series::Series;
