use chrono::{Datelike, NaiveDate, Weekday};
use stagioni_core::{
    AssetKind, Instrument, PricePoint, PriceSeries, StagioniError, YearWindow,
    connector::HistoryProvider,
};
use stagioni_mock::MockConnector;

fn inst(sym: &str) -> Instrument {
    Instrument::from_symbol(sym, AssetKind::Equity).expect("valid symbol")
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn year(y: i32) -> YearWindow {
    YearWindow::new(y, d(y, 1, 1), d(y, 12, 31)).unwrap()
}

#[tokio::test]
async fn synthetic_history_covers_weekdays_only() {
    let mock = MockConnector::new();
    let s = mock.daily_closes(&inst("TSLA"), &year(2025)).await.unwrap();
    assert_eq!(s.len(), 261);
    assert!(s
        .points()
        .iter()
        .all(|p| !matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun)));
    assert!(s.values().all(|v| v > 0.0));
}

#[tokio::test]
async fn same_window_gives_same_series() {
    let mock = MockConnector::new();
    let a = mock.daily_closes(&inst("TSLA"), &year(2022)).await.unwrap();
    let b = mock.daily_closes(&inst("TSLA"), &year(2022)).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn partial_window_stops_at_its_end() {
    let mock = MockConnector::new();
    let w = YearWindow::new(2026, d(2026, 1, 1), d(2026, 3, 15)).unwrap();
    let s = mock.daily_closes(&inst("AAPL"), &w).await.unwrap();
    assert!(s.last_date().unwrap() <= d(2026, 3, 15));
}

#[tokio::test]
async fn scripted_years_and_symbols() {
    let fixed = PriceSeries::from_points(vec![PricePoint::new(d(2020, 6, 1), 42.0)]).unwrap();
    let mock = MockConnector::new()
        .failing_year(2021)
        .empty_year(2022)
        .with_series(2020, fixed.clone());

    let err = mock.daily_closes(&inst("TSLA"), &year(2021)).await.unwrap_err();
    assert!(matches!(err, StagioniError::Connector { .. }));
    assert!(mock.daily_closes(&inst("TSLA"), &year(2022)).await.unwrap().is_empty());
    assert_eq!(mock.daily_closes(&inst("TSLA"), &year(2020)).await.unwrap(), fixed);

    let err = mock.daily_closes(&inst("FAIL"), &year(2023)).await.unwrap_err();
    assert!(matches!(err, StagioniError::Connector { .. }));
    let err = mock.daily_closes(&inst("NOPE"), &year(2023)).await.unwrap_err();
    assert!(matches!(err, StagioniError::NotFound { .. }));

    let years: Vec<i32> = mock.calls().await.iter().map(YearWindow::year).collect();
    assert_eq!(years, vec![2021, 2022, 2020, 2023, 2023]);
}
