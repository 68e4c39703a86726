//! Descriptive analysis of consumption series.
//!
//! # Example
//!
//! ```
//! use consumption_analytics::analysis::{analyze_trends, calculate_statistics};
//! use consumption_analytics::core::{RawRecord, Resource};
//! use consumption_analytics::transform::preprocess;
//!
//! let rows: Vec<RawRecord> = [5.0, 8.0, 6.0, 10.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| RawRecord::new(&format!("2024-01-0{}", i + 1), "A", Resource::Water, v))
//!     .collect();
//! let series = preprocess(&rows, Resource::Water).unwrap();
//!
//! let stats = calculate_statistics(&series, Resource::Water).unwrap();
//! assert_eq!(stats.maximum, 10.0);
//!
//! let trends = analyze_trends(&series, Resource::Water).unwrap();
//! assert!(trends.is_increasing);
//! ```

pub mod comparison;
pub mod statistics;
pub mod trend;

pub use comparison::{compare_blocks, BlockSummary, ComparisonTable};
pub use statistics::{calculate_statistics, StatsSummary};
pub use trend::{analyze_trends, daily_changes, pct_changes, TrendSummary};
