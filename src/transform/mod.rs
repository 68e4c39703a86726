//! Data preparation for consumption series.
//!
//! Provides the preprocessing step that turns loader rows into a canonical
//! [`Series`](crate::core::Series), plus derived calendar features and
//! min-max scaling.
//!
//! # Example
//!
//! ```
//! use consumption_analytics::core::{RawRecord, Resource};
//! use consumption_analytics::transform::preprocess;
//!
//! let rows = vec![
//!     RawRecord::new("2024-01-02", "A", Resource::Electricity, 130.0),
//!     RawRecord::new("2024-01-01", "A", Resource::Electricity, 120.0),
//! ];
//!
//! let series = preprocess(&rows, Resource::Electricity).unwrap();
//! assert_eq!(series.values(), vec![120.0, 130.0]);
//! ```

pub mod calendar;
pub mod preprocess;
pub mod scale;

pub use calendar::{time_features, TimeFeatures};
pub use preprocess::{parse_date, preprocess};
pub use scale::normalize_consumption;
