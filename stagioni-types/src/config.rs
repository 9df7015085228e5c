//! Configuration types shared by the orchestrator, the transforms and the CLI.

use serde::{Deserialize, Serialize};

/// How each year's adjusted closes are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueMode {
    /// Plot adjusted close prices as fetched.
    #[default]
    Absolute,
    /// Plot each day's percent offset from that year's own mean adjusted close.
    Percentage,
}

impl ValueMode {
    /// Map the `--percentage` flag onto a mode.
    #[must_use]
    pub const fn from_percentage_flag(percentage: bool) -> Self {
        if percentage {
            Self::Percentage
        } else {
            Self::Absolute
        }
    }

    /// Axis/title wording for this mode.
    #[must_use]
    pub const fn plot_title(self) -> &'static str {
        match self {
            Self::Absolute => "Adjusted Close Price",
            Self::Percentage => "Percentage Gain/Loss from annual average price",
        }
    }
}

/// What to do when a single year cannot be fetched or transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchPolicy {
    /// Stop at the first failing year; nothing is rendered.
    #[default]
    Abort,
    /// Log the failing year and keep going with the remaining years.
    SkipYear,
}

/// Placement of a leap-year February 29 when remapped onto a non-leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeapDayPolicy {
    /// Drop the point.
    #[default]
    Drop,
    /// Move the point to February 28 unless that day already has a real point.
    ClampToFeb28,
}

/// Run configuration for one overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Number of years including the current one. Non-positive values yield no series.
    pub years: i32,
    /// Absolute prices or percentage deviation from the yearly mean.
    pub mode: ValueMode,
    /// Behavior when one year fails.
    pub fetch_policy: FetchPolicy,
    /// Handling of February 29 during calendar remapping.
    pub leap_day: LeapDayPolicy,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            years: 2,
            mode: ValueMode::default(),
            fetch_policy: FetchPolicy::default(),
            leap_day: LeapDayPolicy::default(),
        }
    }
}
