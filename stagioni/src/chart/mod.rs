//! Chart description built from normalized series, and its PNG rasterizer.
//!
//! `ChartSpec` holds everything the renderer needs (title, axis text, bounds and
//! one line per year) and is independent of any drawing backend, so scenario
//! tests can assert on it without fonts or files.

mod render;

pub use render::render_png;

use chrono::{Datelike, NaiveDate};
use stagioni_core::calendar::{dec31, jan1};
use stagioni_core::{NormalizedSeries, StagioniError, ValueMode};

/// Fraction of the data span added above and below the y bounds.
pub const Y_PADDING: f64 = 0.05;

/// One plotted year.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    /// Legend text (the source year).
    pub label: String,
    /// Points on the current-year calendar, ascending by date.
    pub points: Vec<(NaiveDate, f64)>,
}

/// Backend-independent description of the overlay chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Figure title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// January 1 and December 31 of the current year.
    pub x_range: (NaiveDate, NaiveDate),
    /// Padded value bounds.
    pub y_range: (f64, f64),
    /// Lines in drawing order, current year last.
    pub lines: Vec<ChartLine>,
}

impl ChartSpec {
    /// Describe the overlay of `series` for `ticker`.
    ///
    /// `requested_years` is the count as given by the caller and only feeds the
    /// title; `series` is drawn in the order given.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `current_year` is outside the supported date range.
    pub fn build(
        ticker: &str,
        requested_years: i32,
        mode: ValueMode,
        current_year: i32,
        series: &[NormalizedSeries],
    ) -> Result<Self, StagioniError> {
        let plot_title = mode.plot_title();
        let lines: Vec<ChartLine> = series
            .iter()
            .map(|s| ChartLine {
                label: s.label.clone(),
                points: s.points.iter().map(|p| (p.date, p.value)).collect(),
            })
            .collect();

        Ok(Self {
            title: format!(
                "{ticker} - Comparison of the Last {requested_years} Years ({plot_title})"
            ),
            x_label: "Month".to_string(),
            y_label: plot_title.to_string(),
            x_range: (jan1(current_year)?, dec31(current_year)?),
            y_range: y_bounds(series, mode),
            lines,
        })
    }

    /// True when no year made it into the chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Year shown on the x axis.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.x_range.0.year()
    }
}

/// Min/max over every series, padded by [`Y_PADDING`] of the span.
///
/// A flat range is padded by 5% of its magnitude (at least `0.5`); no data at
/// all gives `[-1, 1]` for percentages and `[0, 1]` for prices.
#[must_use]
pub fn y_bounds(series: &[NormalizedSeries], mode: ValueMode) -> (f64, f64) {
    let bounds = series
        .iter()
        .filter_map(NormalizedSeries::value_bounds)
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));

    match bounds {
        None => match mode {
            ValueMode::Percentage => (-1.0, 1.0),
            ValueMode::Absolute => (0.0, 1.0),
        },
        Some((lo, hi)) => {
            let span = hi - lo;
            let pad = if span > 0.0 {
                span * Y_PADDING
            } else {
                (lo.abs() * Y_PADDING).max(0.5)
            };
            (lo - pad, hi + pad)
        }
    }
}

/// X coordinate of `date`: days since January 1 of its year.
///
/// Every plotted date lies in the current year, so this is a shared day-of-year axis.
#[must_use]
pub fn day_x(date: NaiveDate) -> f64 {
    f64::from(date.ordinal0())
}

/// Month abbreviation (`%b`) for an x coordinate in `year`; empty off the axis.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn month_label(year: i32, x: f64) -> String {
    if !x.is_finite() || x < 0.0 {
        return String::new();
    }
    NaiveDate::from_yo_opt(year, x.round() as u32 + 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

/// First day of every month of `year`, used as major x ticks.
#[must_use]
pub fn month_ticks(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|m| NaiveDate::from_ymd_opt(year, m, 1))
        .collect()
}
