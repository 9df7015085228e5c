//! Mock connector with deterministic synthetic history. No network access.
//!
//! Known symbols (`TSLA`, `AAPL`, `MSFT`, `GOOG`) get one close per weekday.
//! `FAIL` always errors and `EMPTY` always returns no rows; individual years can
//! be scripted to fail, come back empty, or return a fixed series.
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use stagioni_core::connector::{HistoryProvider, SeasonConnector};
use stagioni_core::{Instrument, PriceSeries, StagioniError, YearWindow};
use tokio::sync::Mutex;

mod fixtures;

/// Mock connector for tests. Provides deterministic data from synthetic fixtures.
#[derive(Default)]
pub struct MockConnector {
    failing_years: HashSet<i32>,
    empty_years: HashSet<i32>,
    fixed: HashMap<i32, PriceSeries>,
    calls: Mutex<Vec<YearWindow>>,
}

impl MockConnector {
    /// Connector with no scripted behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every request for `year` fail with a connector error.
    #[must_use]
    pub fn failing_year(mut self, year: i32) -> Self {
        self.failing_years.insert(year);
        self
    }

    /// Make every request for `year` return an empty series.
    #[must_use]
    pub fn empty_year(mut self, year: i32) -> Self {
        self.empty_years.insert(year);
        self
    }

    /// Return `series` verbatim for `year`, regardless of symbol.
    #[must_use]
    pub fn with_series(mut self, year: i32, series: PriceSeries) -> Self {
        self.fixed.insert(year, series);
        self
    }

    /// Windows requested so far, in call order.
    pub async fn calls(&self) -> Vec<YearWindow> {
        self.calls.lock().await.clone()
    }

    fn not_found(what: &str) -> StagioniError {
        StagioniError::not_found(what.to_string())
    }
}

impl SeasonConnector for MockConnector {
    fn name(&self) -> &'static str {
        "stagioni-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        window: &YearWindow,
    ) -> Result<PriceSeries, StagioniError> {
        self.calls.lock().await.push(*window);

        let s = instrument.symbol_str();
        let year = window.year();
        if s == "FAIL" || self.failing_years.contains(&year) {
            return Err(StagioniError::connector(
                "stagioni-mock",
                format!("forced failure: history for {s} in {year}"),
            ));
        }
        if s == "EMPTY" || self.empty_years.contains(&year) {
            return Ok(PriceSeries::default());
        }
        if let Some(series) = self.fixed.get(&year) {
            return Ok(series.clone());
        }

        let base = fixtures::history::base_price(s)
            .ok_or_else(|| Self::not_found(&format!("history for {s}")))?;
        PriceSeries::from_points(fixtures::history::weekdays(base, window))
    }
}
