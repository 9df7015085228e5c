//! stagioni-yfinance
//!
//! Connector that implements `SeasonConnector` on top of the `yfinance-rs`
//! client library. Serves daily adjusted closes for one calendar year at a time.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

use adapter::{RealAdapter, YfHistory};
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use stagioni_core::{
    HistoryRequest, HistoryResponse, Instrument, Interval, PricePoint, PriceSeries, StagioniError,
    YearWindow,
    connector::{HistoryProvider, SeasonConnector},
};

pub(crate) const CONNECTOR_NAME: &str = "stagioni-yfinance";

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = Arc<RealAdapter>;

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
}

/// Phrases Yahoo uses when a symbol has no chart data at all.
const NO_HISTORY_HINTS: [&str; 3] = ["no data", "not found", "delisted"];

/// Classify a failed history call for `symbol`.
///
/// A message that says the symbol has no chart data becomes `NotFound`; any other
/// untyped failure is attributed to this connector. Typed errors pass through.
fn history_error(e: StagioniError, symbol: &str) -> StagioniError {
    let msg = match e {
        StagioniError::Connector { msg, .. } | StagioniError::Other(msg) => msg,
        typed => return typed,
    };
    let lower = msg.to_ascii_lowercase();
    if NO_HISTORY_HINTS.iter().any(|h| lower.contains(h)) {
        StagioniError::not_found(format!("history for {symbol}"))
    } else {
        StagioniError::connector(CONNECTOR_NAME, msg)
    }
}

impl YfConnector {
    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, StagioniError> {
        Ok(Self::from_real(RealAdapter::try_new_default()?))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        Self::from_real(RealAdapter::new(client))
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, StagioniError> {
        Ok(Self::from_real(RealAdapter::try_with_reqwest(http)?))
    }

    #[cfg(not(feature = "test-adapters"))]
    fn from_real(adapter: RealAdapter) -> Self {
        Self {
            history: Arc::new(adapter),
        }
    }

    #[cfg(feature = "test-adapters")]
    fn from_real(adapter: RealAdapter) -> Self {
        Self::from_history_adapter(Arc::new(adapter))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_history_adapter(history: Arc<dyn YfHistory>) -> Self {
        Self { history }
    }

    fn build_request(
        window: &YearWindow,
    ) -> Result<yfinance_rs::core::services::HistoryRequest, StagioniError> {
        let (start, end) = window.utc_period()?;
        let req = HistoryRequest::try_from_period(start, end, Interval::D1)?;
        Ok(yfinance_rs::core::services::HistoryRequest {
            range: req.range(),
            period: req.period().map(|(s, e)| (s.timestamp(), e.timestamp())),
            interval: req.interval(),
            include_prepost: req.include_prepost(),
            include_actions: req.include_actions(),
            auto_adjust: req.auto_adjust(),
            keepna: req.keepna(),
        })
    }
}

/// Convert a provider response into one adjusted close per exchange-local trading day.
///
/// Candles outside `window` are discarded. With `auto_adjust` the provider's `close`
/// already is the adjusted close.
///
/// # Errors
/// Returns `Data` if a close cannot be represented as `f64` or is not finite.
pub fn to_price_series(
    raw: HistoryResponse,
    window: &YearWindow,
) -> Result<PriceSeries, StagioniError> {
    #[cfg(feature = "tracing")]
    {
        if !raw.adjusted {
            tracing::warn!(year = window.year(), "provider returned unadjusted closes");
        }
    }

    let offset = raw
        .meta
        .as_ref()
        .and_then(|m| m.utc_offset_seconds)
        .map_or(0, i64::from);
    let shift = chrono::TimeDelta::try_seconds(offset).unwrap_or_default();

    let mut points = Vec::with_capacity(raw.candles.len());
    for c in raw.candles {
        let date = (c.ts + shift).date_naive();
        if !window.contains(date) {
            continue;
        }
        let value = c.close.amount().to_f64().ok_or_else(|| {
            StagioniError::Data(format!("close on {date} does not fit in f64"))
        })?;
        points.push(PricePoint::new(date, value));
    }
    PriceSeries::from_points(points)
}

impl SeasonConnector for YfConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        window: &YearWindow,
    ) -> Result<PriceSeries, StagioniError> {
        let symbol = instrument.symbol_str();
        let yf_req = Self::build_request(window)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            symbol,
            start = %window.start(),
            end = %window.end(),
            "requesting daily history"
        );
        let raw = self
            .history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| history_error(e, symbol))?;
        to_price_series(raw, window)
    }
}
