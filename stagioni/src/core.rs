use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use stagioni_core::connector::{HistoryProvider, SeasonConnector};
use stagioni_core::{
    AssetKind, FetchPolicy, Instrument, LeapDayPolicy, NormalizedSeries, SeasonConfig,
    StagioniError, ValueMode, YearRange, YearSlot, normalize_year,
};

use crate::chart::{ChartSpec, render_png};
use crate::theme::Theme;
use crate::viewer::Viewer;

/// Ticker plotted when no instrument is given to the builder.
pub const DEFAULT_TICKER: &str = "TSLA";

/// Orchestrator that walks the requested years and turns them into one overlay.
pub struct Stagioni {
    connector: Arc<dyn SeasonConnector>,
    instrument: Instrument,
    cfg: SeasonConfig,
}

/// Builder for constructing a `Stagioni` instance with custom configuration.
pub struct StagioniBuilder {
    connector: Option<Arc<dyn SeasonConnector>>,
    instrument: Option<Instrument>,
    cfg: SeasonConfig,
}

impl Default for StagioniBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StagioniBuilder {
    /// Create a new builder with the default configuration (2 years, absolute prices,
    /// abort on the first failing year, drop remapped leap days).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            instrument: None,
            cfg: SeasonConfig::default(),
        }
    }

    /// Register the data connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn SeasonConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Plot `instrument` instead of the default ticker.
    #[must_use]
    pub fn instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Replace the whole run configuration.
    #[must_use]
    pub fn config(mut self, cfg: SeasonConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Number of years including the current one. Non-positive values plot nothing.
    #[must_use]
    pub const fn years(mut self, years: i32) -> Self {
        self.cfg.years = years;
        self
    }

    /// Absolute prices or percentage deviation from each year's mean.
    #[must_use]
    pub const fn mode(mut self, mode: ValueMode) -> Self {
        self.cfg.mode = mode;
        self
    }

    /// Abort on the first failing year, or skip it and continue.
    #[must_use]
    pub const fn fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.cfg.fetch_policy = policy;
        self
    }

    /// How a leap-year February 29 is remapped onto a non-leap current year.
    #[must_use]
    pub const fn leap_day(mut self, policy: LeapDayPolicy) -> Self {
        self.cfg.leap_day = policy;
        self
    }

    /// Build the `Stagioni` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no connector was registered.
    /// - `Unsupported` if the connector does not serve history.
    /// - `InvalidArg` if the default ticker cannot be turned into an instrument.
    pub fn build(self) -> Result<Stagioni, StagioniError> {
        let connector = self.connector.ok_or_else(|| {
            StagioniError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        if connector.as_history_provider().is_none() {
            return Err(StagioniError::unsupported("history"));
        }
        let instrument = match self.instrument {
            Some(i) => i,
            None => Instrument::from_symbol(DEFAULT_TICKER, AssetKind::Equity)?,
        };
        Ok(Stagioni {
            connector,
            instrument,
            cfg: self.cfg,
        })
    }
}

impl Stagioni {
    /// Start building a new `Stagioni` instance.
    #[must_use]
    pub fn builder() -> StagioniBuilder {
        StagioniBuilder::new()
    }

    /// Active run configuration.
    #[must_use]
    pub const fn config(&self) -> &SeasonConfig {
        &self.cfg
    }

    /// Ticker symbol being plotted.
    #[must_use]
    pub fn ticker(&self) -> &str {
        self.instrument.symbol_str()
    }

    /// Fetch and normalize every year of the range ending at `today`'s year.
    ///
    /// Years are fetched one at a time, oldest first, so the returned vector is in
    /// drawing order with the current year last.
    ///
    /// # Errors
    /// Under `FetchPolicy::Abort` the first failing year is returned as
    /// `YearFailed`. Under `SkipYear` failures are logged and omitted.
    #[tracing::instrument(
        name = "stagioni::collect",
        skip(self),
        fields(ticker = %self.ticker(), years = self.cfg.years, mode = ?self.cfg.mode),
    )]
    pub async fn collect(&self, today: NaiveDate) -> Result<Vec<NormalizedSeries>, StagioniError> {
        let range = YearRange::new(today.year(), self.cfg.years);
        if range.is_empty() {
            tracing::warn!(
                requested = range.requested(),
                "year count is not positive; nothing will be fetched"
            );
        }
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| StagioniError::unsupported("history"))?;

        let mut out = Vec::new();
        for slot in range.slots() {
            match self
                .fetch_year(provider, slot, today, range.current_year())
                .await
            {
                Ok(series) => out.push(series),
                Err(e) => match self.cfg.fetch_policy {
                    FetchPolicy::Abort => return Err(e),
                    FetchPolicy::SkipYear => {
                        tracing::warn!(year = slot.year, error = %e, "skipping year");
                    }
                },
            }
        }
        Ok(out)
    }

    async fn fetch_year(
        &self,
        provider: &dyn HistoryProvider,
        slot: YearSlot,
        today: NaiveDate,
        current_year: i32,
    ) -> Result<NormalizedSeries, StagioniError> {
        let window = slot.window(today).map_err(|e| e.for_year(slot.year))?;
        let series = provider
            .daily_closes(&self.instrument, &window)
            .await
            .map_err(|e| e.for_year(slot.year))?;
        tracing::info!(
            year = slot.year,
            rows = series.len(),
            connector = self.connector.name(),
            "fetched daily closes"
        );
        normalize_year(slot, series, current_year, self.cfg.mode, self.cfg.leap_day)
            .map_err(|e| e.for_year(slot.year))
    }

    /// Collect the series and describe the chart, without drawing anything.
    ///
    /// # Errors
    /// Propagates failures from [`Stagioni::collect`] and [`ChartSpec::build`].
    pub async fn chart(&self, today: NaiveDate) -> Result<ChartSpec, StagioniError> {
        let series = self.collect(today).await?;
        ChartSpec::build(
            self.ticker(),
            self.cfg.years,
            self.cfg.mode,
            today.year(),
            &series,
        )
    }

    /// Full run: collect, show the chart and wait for the viewer to return, then
    /// write the PNG at `output` (overwriting it).
    ///
    /// Nothing is written if collection or the viewer fails.
    ///
    /// # Errors
    /// Propagates collection, viewer, rendering and file failures.
    pub async fn plot(
        &self,
        today: NaiveDate,
        theme: &Theme,
        output: &Path,
        viewer: &dyn Viewer,
    ) -> Result<ChartSpec, StagioniError> {
        let spec = self.chart(today).await?;
        viewer.show(&spec, theme)?;
        render_png(&spec, theme, output)?;
        tracing::info!(path = %output.display(), lines = spec.lines.len(), "chart saved");
        Ok(spec)
    }
}
