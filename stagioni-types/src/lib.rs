//! Stagioni-specific error and configuration primitives built on top of `paft`.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{FetchPolicy, LeapDayPolicy, SeasonConfig, ValueMode};
pub use error::StagioniError;
