// Shared fixtures; not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use stagioni::Stagioni;
use stagioni_core::{
    AssetKind, Instrument, PricePoint, PriceSeries, SeasonConfig, StagioniError,
};
use stagioni_mock::MockConnector;

/// Monday 2026-10-19, the reference "today" for most tests.
pub const TODAY: (i32, u32, u32) = (2026, 10, 19);

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn today() -> NaiveDate {
    d(TODAY.0, TODAY.1, TODAY.2)
}

pub fn build(mock: &Arc<MockConnector>, cfg: SeasonConfig) -> Result<Stagioni, StagioniError> {
    Stagioni::builder()
        .with_connector(mock.clone())
        .config(cfg)
        .build()
}

pub fn cfg(years: i32) -> SeasonConfig {
    SeasonConfig {
        years,
        ..SeasonConfig::default()
    }
}

pub fn series(points: &[(NaiveDate, f64)]) -> PriceSeries {
    PriceSeries::from_points(points.iter().map(|(d, v)| PricePoint::new(*d, *v))).unwrap()
}

pub fn instrument(symbol: &str) -> Instrument {
    Instrument::from_symbol(symbol, AssetKind::Equity).unwrap()
}
