use async_trait::async_trait;

use crate::calendar::YearWindow;
use crate::series::PriceSeries;
use crate::StagioniError;
use paft::domain::Instrument;

/// Focused role trait for connectors that provide daily adjusted-close history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch one adjusted close per trading day inside `window` (both ends inclusive).
    ///
    /// Implementations return points sorted by date with unique dates. An empty
    /// series is a valid answer; the caller decides whether that is fatal.
    async fn daily_closes(
        &self,
        instrument: &Instrument,
        window: &YearWindow,
    ) -> Result<PriceSeries, StagioniError>;
}

/// Primary connector interface. Capabilities are advertised via the `as_*` accessors.
pub trait SeasonConnector: Send + Sync {
    /// Stable connector name used in logs and error attribution.
    fn name(&self) -> &'static str;

    /// Human-readable data vendor.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
}
