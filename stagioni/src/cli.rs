//! Command-line interface of the `tslacompare` binary.

use clap::{Parser, ValueEnum};
use stagioni_core::{FetchPolicy, LeapDayPolicy, SeasonConfig, ValueMode};

use crate::theme::Theme;

/// tslacompare CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "tslacompare")]
#[command(
    about = "Plot TSLA stock data for a specified number of years including the current year, with customizable theme options."
)]
#[command(version)]
pub struct Cli {
    /// Number of years to plot, including the current year
    #[arg(short = 'y', long, default_value_t = 2, allow_negative_numbers = true)]
    pub years: i32,

    /// Plot percentage gain/loss compared to the year's average closing price
    #[arg(long)]
    pub percentage: bool,

    /// Use a light theme for the plot instead of the dark grey default
    #[arg(long)]
    pub light: bool,

    /// What to do when one year cannot be fetched
    #[arg(long, value_enum, default_value_t = OnFetchError::Abort)]
    pub on_fetch_error: OnFetchError,

    /// Where February 29 goes when a leap year is drawn on a non-leap calendar
    #[arg(long, value_enum, default_value_t = LeapDay::Drop)]
    pub leap_day: LeapDay,

    /// Save the chart without opening the chart window
    #[arg(long)]
    pub no_show: bool,
}

/// `--on-fetch-error` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFetchError {
    /// Stop at the first failing year
    Abort,
    /// Log the failing year and plot the rest
    Skip,
}

/// `--leap-day` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapDay {
    /// Leave the point out
    Drop,
    /// Move it to February 28 when that day has no price of its own
    Clamp,
}

impl Cli {
    /// Run configuration selected by the flags.
    #[must_use]
    pub const fn season_config(&self) -> SeasonConfig {
        SeasonConfig {
            years: self.years,
            mode: ValueMode::from_percentage_flag(self.percentage),
            fetch_policy: match self.on_fetch_error {
                OnFetchError::Abort => FetchPolicy::Abort,
                OnFetchError::Skip => FetchPolicy::SkipYear,
            },
            leap_day: match self.leap_day {
                LeapDay::Drop => LeapDayPolicy::Drop,
                LeapDay::Clamp => LeapDayPolicy::ClampToFeb28,
            },
        }
    }

    /// Theme selected by `--light`.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::from_light_flag(self.light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tslacompare").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.years, 2);
        assert!(!cli.no_show);
        assert_eq!(cli.season_config(), SeasonConfig::default());
        assert_eq!(cli.theme().kind, ThemeKind::Dark);
    }

    #[test]
    fn short_and_long_year_flags() {
        assert_eq!(parse(&["-y", "5"]).years, 5);
        assert_eq!(parse(&["--years", "1"]).years, 1);
        assert_eq!(parse(&["--years", "-3"]).years, -3);
    }

    #[test]
    fn flags_map_to_config() {
        let cli = parse(&[
            "--percentage",
            "--light",
            "--on-fetch-error",
            "skip",
            "--leap-day",
            "clamp",
        ]);
        let cfg = cli.season_config();
        assert_eq!(cfg.mode, ValueMode::Percentage);
        assert_eq!(cfg.fetch_policy, FetchPolicy::SkipYear);
        assert_eq!(cfg.leap_day, LeapDayPolicy::ClampToFeb28);
        assert_eq!(cli.theme().kind, ThemeKind::Light);
    }

    #[test]
    fn non_integer_years_is_rejected() {
        assert!(Cli::try_parse_from(["tslacompare", "--years", "abc"]).is_err());
        assert!(Cli::try_parse_from(["tslacompare", "--years", "1.5"]).is_err());
    }
}
