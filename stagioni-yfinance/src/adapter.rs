#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use stagioni_core::StagioniError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, StagioniError>;
}

/// Production adapter backed by `yfinance_rs::YfClient`.
///
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` over a cookie-enabled `reqwest` client with a browser user agent.
    ///
    /// # Errors
    /// Returns `Connector` if either HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, StagioniError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| StagioniError::connector(crate::CONNECTOR_NAME, e.to_string()))?;
        Self::try_with_reqwest(http)
    }

    /// Build from a caller-provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns `Connector` if the `YfClient` cannot be constructed.
    pub fn try_with_reqwest(http: reqwest::Client) -> Result<Self, StagioniError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StagioniError::connector(crate::CONNECTOR_NAME, e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

pub(crate) fn map_yf_err(e: &yf::YfError, context: &str) -> StagioniError {
    match e {
        yf::YfError::NotFound { .. } => StagioniError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            StagioniError::connector(crate::CONNECTOR_NAME, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => StagioniError::connector(
            crate::CONNECTOR_NAME,
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => StagioniError::connector(
            crate::CONNECTOR_NAME,
            format!("status {status}: {context}"),
        ),
        other => StagioniError::connector(crate::CONNECTOR_NAME, other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, StagioniError> {
        // `YfClient` implements `HistoryService`, which we use directly.
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

/// Canned history for network-free tests (requires the `test-adapters` feature).
///
/// The closure sees the symbol and the request exactly as `YfConnector` built it.
#[cfg(feature = "test-adapters")]
pub struct CannedHistory<F>(F);

#[cfg(feature = "test-adapters")]
#[async_trait]
impl<F> YfHistory for CannedHistory<F>
where
    F: Fn(&str, &yf::core::services::HistoryRequest) -> Result<yf::HistoryResponse, StagioniError>
        + Send
        + Sync,
{
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, StagioniError> {
        (self.0)(symbol, &req)
    }
}

/// Wrap `answer` as a shareable history adapter.
#[cfg(feature = "test-adapters")]
pub fn canned_history<F>(answer: F) -> Arc<dyn YfHistory>
where
    F: Fn(&str, &yf::core::services::HistoryRequest) -> Result<yf::HistoryResponse, StagioniError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(CannedHistory(answer))
}
