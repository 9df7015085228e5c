//! Re-export of foundational types from `paft` and `stagioni-types`.
// Consolidated so downstream crates can depend on `stagioni-core` only

pub use stagioni_types::{FetchPolicy, LeapDayPolicy, SeasonConfig, StagioniError, ValueMode};

pub use paft::domain::{AssetKind, Instrument, Symbol};

pub use paft::market::requests::history::{HistoryRequest, Interval};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
pub use paft::money::{Currency, IsoCurrency, Money};
