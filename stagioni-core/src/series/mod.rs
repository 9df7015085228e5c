//! Daily price series and the per-year transforms applied before plotting.
//!
//! Modules include:
//! - `stats`: yearly mean and percentage deviation
//! - `remap`: moving a past year's dates onto the current calendar year
//! - `normalize`: the combined per-year transform used by the fetch loop
use std::collections::{BTreeMap, btree_map::Entry};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::StagioniError;

/// Combined per-year transform.
pub mod normalize;
/// Calendar remapping onto the current year.
pub mod remap;
/// Mean and percentage deviation helpers.
pub mod stats;

/// One trading day's adjusted close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day.
    pub date: NaiveDate,
    /// Adjusted close (or its transformed value).
    pub value: f64,
}

impl PricePoint {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Adjusted closes for one year, sorted by date with unique dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from provider rows in any order.
    ///
    /// Rows are keyed by date; the first appearance wins for duplicates.
    ///
    /// # Errors
    /// Returns `Err(StagioniError::Data)` if any value is NaN or infinite.
    pub fn from_points<I>(points: I) -> Result<Self, StagioniError>
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for p in points {
            if !p.value.is_finite() {
                return Err(StagioniError::Data(format!(
                    "non-finite price {} on {}",
                    p.value, p.date
                )));
            }
            if let Entry::Vacant(v) = by_date.entry(p.date) {
                v.insert(p.value);
            }
        }
        Ok(Self {
            points: by_date
                .into_iter()
                .map(|(date, value)| PricePoint { date, value })
                .collect(),
        })
    }

    /// Points in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Values in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Number of trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the provider returned no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First trading day, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last trading day, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Consume into the raw points.
    #[must_use]
    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

/// A year's series ready for plotting: values possibly converted, dates possibly remapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    /// Source calendar year.
    pub year: i32,
    /// Legend label (the source year).
    pub label: String,
    /// Plotted points, ascending by (remapped) date.
    pub points: Vec<PricePoint>,
}

impl NormalizedSeries {
    /// Arithmetic mean of the plotted values, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        stats::mean(self.points.iter().map(|p| p.value))
    }

    /// Smallest and largest plotted value.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.value).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn from_points_sorts_and_keeps_first_duplicate() {
        let s = PriceSeries::from_points(vec![
            PricePoint::new(d(1, 3), 3.0),
            PricePoint::new(d(1, 2), 2.0),
            PricePoint::new(d(1, 3), 99.0),
        ])
        .unwrap();
        let got: Vec<(NaiveDate, f64)> = s.points().iter().map(|p| (p.date, p.value)).collect();
        assert_eq!(got, vec![(d(1, 2), 2.0), (d(1, 3), 3.0)]);
        assert_eq!(s.first_date(), Some(d(1, 2)));
        assert_eq!(s.last_date(), Some(d(1, 3)));
    }

    #[test]
    fn non_finite_values_are_data_errors() {
        let err = PriceSeries::from_points(vec![PricePoint::new(d(1, 2), f64::NAN)]).unwrap_err();
        assert!(matches!(err, StagioniError::Data(_)));
    }

    #[test]
    fn value_bounds_of_empty_is_none() {
        let s = NormalizedSeries {
            year: 2025,
            label: "2025".into(),
            points: vec![],
        };
        assert_eq!(s.value_bounds(), None);
        assert_eq!(s.mean(), None);
    }
}
