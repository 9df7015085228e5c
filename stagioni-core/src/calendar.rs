use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::StagioniError;

/// One year of the overlay as visited by the fetch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearSlot {
    /// Calendar year fetched for this slot.
    pub year: i32,
    /// Distance from the current year (`0` for the current year).
    pub offset: u32,
}

impl YearSlot {
    /// True for the current, partial year.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.offset == 0
    }

    /// Fetch window for this slot given today's date.
    ///
    /// Past years cover Jan 1 through Dec 31; the current year ends at `today`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the year is outside chrono's supported range.
    pub fn window(&self, today: NaiveDate) -> Result<YearWindow, StagioniError> {
        let start = jan1(self.year)?;
        let end = if self.is_current() {
            today
        } else {
            dec31(self.year)?
        };
        YearWindow::new(self.year, start, end)
    }
}

/// The years walked by the fetch loop, oldest first so the current year is drawn last.
///
/// A non-positive count yields an empty range; nothing is fetched or plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    current_year: i32,
    count: i32,
}

impl YearRange {
    /// Build the range of `count` years ending at `current_year`.
    #[must_use]
    pub const fn new(current_year: i32, count: i32) -> Self {
        Self {
            current_year,
            count,
        }
    }

    /// The year every historical series is remapped onto.
    #[must_use]
    pub const fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Requested count as given, including non-positive values.
    #[must_use]
    pub const fn requested(&self) -> i32 {
        self.count
    }

    /// Number of slots actually produced.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.count.max(0)).unwrap_or(0)
    }

    /// True when no year will be fetched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count <= 0
    }

    /// Iterate slots from offset `count - 1` down to `0`.
    pub fn slots(&self) -> impl Iterator<Item = YearSlot> + '_ {
        (0..self.count.max(0)).rev().map(move |i| YearSlot {
            year: self.current_year - i,
            offset: i.unsigned_abs(),
        })
    }
}

/// Inclusive date window requested from a provider for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    year: i32,
    start: NaiveDate,
    end: NaiveDate,
}

impl YearWindow {
    /// Build a window, rejecting an end before the start.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `end < start`.
    pub fn new(year: i32, start: NaiveDate, end: NaiveDate) -> Result<Self, StagioniError> {
        if end < start {
            return Err(StagioniError::InvalidArg(format!(
                "window for {year} ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { year, start, end })
    }

    /// Calendar year the window belongs to.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First day (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True if `date` lies within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Half-open UTC period `[start 00:00, end + 1 day 00:00)` for providers with exclusive ends.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the day after `end` is not representable.
    pub fn utc_period(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), StagioniError> {
        let after = self
            .end
            .checked_add_days(Days::new(1))
            .ok_or_else(|| StagioniError::InvalidArg(format!("no day after {}", self.end)))?;
        Ok((midnight_utc(self.start), midnight_utc(after)))
    }
}

/// January 1 of `year`.
///
/// # Errors
/// Returns `InvalidArg` if the year is outside chrono's range.
pub fn jan1(year: i32) -> Result<NaiveDate, StagioniError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| StagioniError::InvalidArg(format!("year {year} out of range")))
}

/// December 31 of `year`.
///
/// # Errors
/// Returns `InvalidArg` if the year is outside chrono's range.
pub fn dec31(year: i32) -> Result<NaiveDate, StagioniError> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| StagioniError::InvalidArg(format!("year {year} out of range")))
}

/// True for Gregorian leap years.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Zero-based offset of `date` from January 1 of its own year.
#[must_use]
pub fn day_of_year_offset(date: NaiveDate) -> u32 {
    date.ordinal0()
}

fn midnight_utc(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(chrono::NaiveTime::MIN).and_utc()
}
