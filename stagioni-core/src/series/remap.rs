use std::collections::{BTreeMap, btree_map::Entry};

use chrono::{Datelike, NaiveDate};

use crate::series::PricePoint;
use crate::LeapDayPolicy;

/// Rewrite the year of `date` to `target_year`, keeping month and day.
///
/// February 29 has no counterpart in a non-leap target year; `policy`
/// decides whether it is dropped (`None`) or moved to February 28.
#[must_use]
pub fn remap_date(date: NaiveDate, target_year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    if let Some(d) = date.with_year(target_year) {
        return Some(d);
    }
    match policy {
        LeapDayPolicy::Drop => None,
        LeapDayPolicy::ClampToFeb28 => NaiveDate::from_ymd_opt(target_year, 2, 28),
    }
}

/// Remap every point onto `target_year`.
///
/// Output stays sorted with unique dates. A clamped leap day never displaces a
/// real February 28 trading day.
#[must_use]
pub fn remap_series(
    points: &[PricePoint],
    target_year: i32,
    policy: LeapDayPolicy,
) -> Vec<PricePoint> {
    // value, moved-by-policy
    let mut out: BTreeMap<NaiveDate, (f64, bool)> = BTreeMap::new();
    for p in points {
        let Some(date) = remap_date(p.date, target_year, policy) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(date = %p.date, target_year, "dropping leap day during remap");
            continue;
        };
        let clamped = date.month() != p.date.month() || date.day() != p.date.day();
        match out.entry(date) {
            Entry::Vacant(v) => {
                v.insert((p.value, clamped));
            }
            Entry::Occupied(mut o) => {
                if o.get().1 && !clamped {
                    o.insert((p.value, false));
                }
            }
        }
    }
    out.into_iter()
        .map(|(date, (value, _))| PricePoint { date, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn ordinary_dates_keep_month_and_day() {
        assert_eq!(
            remap_date(d(2021, 7, 4), 2026, LeapDayPolicy::Drop),
            Some(d(2026, 7, 4))
        );
    }

    #[test]
    fn leap_day_is_dropped_by_default() {
        assert_eq!(remap_date(d(2024, 2, 29), 2026, LeapDayPolicy::default()), None);
    }

    #[test]
    fn leap_day_can_be_clamped() {
        assert_eq!(
            remap_date(d(2024, 2, 29), 2026, LeapDayPolicy::ClampToFeb28),
            Some(d(2026, 2, 28))
        );
    }

    #[test]
    fn leap_day_survives_into_leap_target() {
        assert_eq!(
            remap_date(d(2020, 2, 29), 2028, LeapDayPolicy::Drop),
            Some(d(2028, 2, 29))
        );
    }

    #[test]
    fn clamped_leap_day_does_not_replace_real_feb_28() {
        let pts = vec![
            PricePoint::new(d(2024, 2, 28), 1.0),
            PricePoint::new(d(2024, 2, 29), 2.0),
            PricePoint::new(d(2024, 3, 1), 3.0),
        ];
        let out = remap_series(&pts, 2026, LeapDayPolicy::ClampToFeb28);
        assert_eq!(
            out,
            vec![
                PricePoint::new(d(2026, 2, 28), 1.0),
                PricePoint::new(d(2026, 3, 1), 3.0),
            ]
        );
    }

    #[test]
    fn clamped_leap_day_fills_missing_feb_28() {
        let pts = vec![
            PricePoint::new(d(2024, 2, 27), 1.0),
            PricePoint::new(d(2024, 2, 29), 2.0),
        ];
        let out = remap_series(&pts, 2026, LeapDayPolicy::ClampToFeb28);
        assert_eq!(out.last(), Some(&PricePoint::new(d(2026, 2, 28), 2.0)));
        let dropped = remap_series(&pts, 2026, LeapDayPolicy::Drop);
        assert_eq!(dropped.len(), 1);
    }
}
