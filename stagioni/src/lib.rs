//! Stagioni overlays a stock's recent calendar years on one January-to-December
//! axis so seasonal price moves can be compared at a glance.
//!
//! Overview
//! - Fetches daily adjusted closes one year at a time, oldest first, through a
//!   connector implementing the `stagioni_core` contracts.
//! - Optionally converts each year into percent deviation from its own mean.
//! - Moves past years onto the current calendar year and shows one line per
//!   year in a window; once the window closes the same chart is saved as a PNG.
//!
//! Key behaviors and trade-offs
//! - Fetch policy:
//!   - `Abort`: the first failing year stops the run and nothing is drawn.
//!   - `SkipYear`: failing years are logged and left out of the chart.
//! - Leap days: a February 29 drawn on a non-leap calendar is dropped, or moved to
//!   February 28 when that day has no price of its own.
//! - The percentage mean of the current year covers only the days traded so far.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use stagioni::{Stagioni, theme::Theme, viewer::NoViewer};
//! use stagioni_core::ValueMode;
//!
//! let yf = Arc::new(stagioni_yfinance::YfConnector::try_new_default()?);
//! let stagioni = Stagioni::builder()
//!     .with_connector(yf)
//!     .years(3)
//!     .mode(ValueMode::Percentage)
//!     .build()?;
//! let today = chrono::Local::now().date_naive();
//! stagioni
//!     .plot(today, &Theme::dark(), "tslacompare.png".as_ref(), &NoViewer)
//!     .await?;
//! ```
#![warn(missing_docs)]

/// Running the binary end to end.
pub mod app;
/// Chart description and PNG rendering.
pub mod chart;
/// Command-line flags.
pub mod cli;
mod core;
/// Dark and light themes.
pub mod theme;
/// Showing the chart in a window.
pub mod viewer;

pub use crate::core::{DEFAULT_TICKER, Stagioni, StagioniBuilder};
pub use chart::{ChartLine, ChartSpec};
