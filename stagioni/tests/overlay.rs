mod helpers;

use std::sync::Arc;

use chrono::Datelike;
use helpers::{build, cfg, d, today};
use stagioni::cli::Cli;
use stagioni::theme::ThemeKind;
use stagioni_core::{SeasonConfig, ValueMode};
use stagioni_mock::MockConnector;

use clap::Parser;

#[tokio::test]
async fn one_year_defaults_plots_current_year_prices() {
    let mock = Arc::new(MockConnector::new());
    let s = build(&mock, cfg(1)).expect("builds");
    let spec = s.chart(today()).await.expect("chart");

    assert_eq!(spec.lines.len(), 1);
    assert_eq!(spec.lines[0].label, "2026");
    assert_eq!(
        spec.title,
        "TSLA - Comparison of the Last 1 Years (Adjusted Close Price)"
    );
    let first = spec.lines[0].points[0];
    assert_eq!(first.0, d(2026, 1, 1));
    assert!(first.1 > 100.0, "absolute prices stay in price units");
    let last = spec.lines[0].points.last().unwrap();
    assert_eq!(last.0, today());
}

#[tokio::test]
async fn three_years_percentage_are_zero_mean_and_share_a_calendar() {
    // A year range without a leap year keeps every transformed point.
    let today = d(2027, 6, 15);
    let mock = Arc::new(MockConnector::new());
    let s = build(
        &mock,
        SeasonConfig {
            years: 3,
            mode: ValueMode::Percentage,
            ..SeasonConfig::default()
        },
    )
    .unwrap();
    let lines = s.collect(today).await.unwrap();

    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["2025", "2026", "2027"]);
    for l in &lines {
        let mean = l.mean().unwrap();
        assert!(mean.abs() < 1e-9, "{} mean was {mean}", l.label);
        assert!(l.points.iter().all(|p| p.date.year() == 2027));
    }
    let current = lines.last().unwrap();
    assert_eq!(current.points.last().unwrap().date, today);
}

#[tokio::test]
async fn two_years_light_theme() {
    let cli = Cli::try_parse_from(["tslacompare", "--years", "2", "--light"]).unwrap();
    assert_eq!(cli.theme().kind, ThemeKind::Light);

    let mock = Arc::new(MockConnector::new());
    let s = build(&mock, cli.season_config()).unwrap();
    let spec = s.chart(today()).await.unwrap();
    let labels: Vec<&str> = spec.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["2025", "2026"]);
}

#[tokio::test]
async fn non_positive_years_fetch_nothing_and_draw_an_empty_frame() {
    for years in [0, -1] {
        let mock = Arc::new(MockConnector::new());
        let s = build(&mock, cfg(years)).unwrap();
        let spec = s.chart(today()).await.unwrap();
        assert!(spec.is_empty());
        assert!(mock.calls().await.is_empty());
        assert_eq!(spec.x_range, (d(2026, 1, 1), d(2026, 12, 31)));
        assert_eq!(spec.y_range, (0.0, 1.0));
    }
}

#[tokio::test]
async fn years_are_fetched_oldest_first_with_full_past_windows() {
    let mock = Arc::new(MockConnector::new());
    let s = build(&mock, cfg(3)).unwrap();
    s.collect(today()).await.unwrap();

    let calls = mock.calls().await;
    let years: Vec<i32> = calls.iter().map(|w| w.year()).collect();
    assert_eq!(years, vec![2024, 2025, 2026]);
    assert_eq!((calls[0].start(), calls[0].end()), (d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!((calls[2].start(), calls[2].end()), (d(2026, 1, 1), today()));
}

#[tokio::test]
async fn past_years_are_remapped_current_year_is_not() {
    let mock = Arc::new(MockConnector::new());
    let s = build(&mock, cfg(2)).unwrap();
    let lines = s.collect(today()).await.unwrap();

    let past = &lines[0];
    assert_eq!(past.year, 2025);
    assert!(past.points.iter().all(|p| p.date.year() == 2026));
    // 2025-01-01 was a Wednesday and is kept on the same month/day.
    assert_eq!(past.points[0].date, d(2026, 1, 1));
    assert!(past.points.last().unwrap().date <= d(2026, 12, 31));

    let current = &lines[1];
    assert!(current.points.iter().all(|p| p.date <= today()));
}

#[tokio::test]
async fn x_bounds_do_not_follow_the_data() {
    let mock = Arc::new(MockConnector::new());
    let s = build(&mock, cfg(1)).unwrap();
    let spec = s.chart(d(2026, 2, 3)).await.unwrap();
    assert_eq!(spec.x_range, (d(2026, 1, 1), d(2026, 12, 31)));
    let (lo, hi) = spec.y_range;
    for (_, v) in &spec.lines[0].points {
        assert!(lo < *v && *v < hi);
    }
}

#[tokio::test]
async fn builder_requires_a_connector() {
    let err = stagioni::Stagioni::builder().build().err().unwrap();
    assert!(matches!(err, stagioni_core::StagioniError::InvalidArg(_)));
}

#[tokio::test]
async fn custom_instrument_changes_the_title() {
    let mock = Arc::new(MockConnector::new());
    let s = stagioni::Stagioni::builder()
        .with_connector(mock.clone())
        .instrument(helpers::instrument("AAPL"))
        .years(1)
        .build()
        .unwrap();
    assert_eq!(s.ticker(), "AAPL");
    let spec = s.chart(today()).await.unwrap();
    assert!(spec.title.starts_with("AAPL - Comparison of the Last 1 Years"));
}
