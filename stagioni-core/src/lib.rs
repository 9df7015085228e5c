//! stagioni-core
//!
//! Core types, traits, and transforms shared across the stagioni crates.
//!
//! - `types`: re-exported foundational types (instruments, errors, configuration).
//! - `calendar`: the year range walked by the fetch loop and per-year fetch windows.
//! - `series`: daily price series, percentage deviation and calendar remapping.
//! - `connector`: the `SeasonConnector` trait and the history capability trait.
#![warn(missing_docs)]

/// Year ranges and fetch windows.
pub mod calendar;
/// Connector capability traits and the primary `SeasonConnector` interface.
pub mod connector;
/// Daily price series and their per-year transforms.
pub mod series;
pub mod types;

pub use calendar::{YearRange, YearSlot, YearWindow};
pub use connector::SeasonConnector;
pub use series::normalize::normalize_year;
pub use series::remap::{remap_date, remap_series};
pub use series::stats::{mean, percent_deviation};
pub use series::{NormalizedSeries, PricePoint, PriceSeries};
pub use types::*;
