use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stagioni workspace.
///
/// Covers argument validation, provider-tagged failures, unusable data and
/// the per-year wrapper used by the fetch loop.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StagioniError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// Issues with the returned or expected data (zero mean, bad values, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The provider answered but returned no rows for the requested year.
    #[error("no price rows returned for {year}")]
    EmptySeries {
        /// Calendar year that came back empty.
        year: i32,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for TSLA".
        what: String,
    },

    /// A single year of the overlay could not be produced.
    #[error("year {year} failed: {source}")]
    YearFailed {
        /// Calendar year whose fetch or transform failed.
        year: i32,
        /// Underlying failure.
        source: Box<StagioniError>,
    },

    /// Rasterizing the chart failed.
    #[error("render failed: {0}")]
    Render(String),

    /// Writing the image or launching the viewer failed.
    #[error("i/o failure: {0}")]
    Io(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl StagioniError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: attach the calendar year to a failure from the fetch loop.
    #[must_use]
    pub fn for_year(self, year: i32) -> Self {
        match self {
            already @ Self::YearFailed { .. } => already,
            other => Self::YearFailed {
                year,
                source: Box::new(other),
            },
        }
    }

    /// Returns the year this error is attributed to, if any.
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        match self {
            Self::YearFailed { year, .. } | Self::EmptySeries { year } => Some(*year),
            _ => None,
        }
    }

    /// Strip any `YearFailed` wrappers and return the underlying failure.
    #[must_use]
    pub fn into_root(self) -> Self {
        match self {
            Self::YearFailed { source, .. } => source.into_root(),
            other => other,
        }
    }
}

impl From<paft::Error> for StagioniError {
    fn from(err: paft::Error) -> Self {
        use paft::Error as E;
        match err {
            E::Money(_) => Self::Data(err.to_string()),
            E::Core(_) | E::Domain(_) | E::Market(_) | E::MoneyParse(_) | E::Canonical(_) => {
                Self::InvalidArg(err.to_string())
            }
        }
    }
}

impl From<paft::market::MarketError> for StagioniError {
    fn from(e: paft::market::MarketError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::domain::DomainError> for StagioniError {
    fn from(e: paft::domain::DomainError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::money::MoneyError> for StagioniError {
    fn from(e: paft::money::MoneyError) -> Self {
        Self::Data(e.to_string())
    }
}

impl From<std::io::Error> for StagioniError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
