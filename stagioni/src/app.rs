use std::path::Path;
use std::sync::Arc;

use stagioni_core::StagioniError;
use stagioni_yfinance::YfConnector;

use crate::chart::ChartSpec;
use crate::cli::Cli;
use crate::core::Stagioni;
use crate::viewer::{NoViewer, Viewer, WindowViewer};

/// Where the chart is written, relative to the working directory.
pub const OUTPUT_PATH: &str = "./tslacompare.png";

/// Run `tslacompare` with parsed flags against Yahoo Finance.
///
/// # Errors
/// Returns the first connector, data, rendering or viewer failure.
pub async fn run(cli: &Cli) -> Result<ChartSpec, StagioniError> {
    let yf = Arc::new(YfConnector::try_new_default()?);
    let stagioni = Stagioni::builder()
        .with_connector(yf)
        .config(cli.season_config())
        .build()?;

    let today = chrono::Local::now().date_naive();
    let viewer: &dyn Viewer = if cli.no_show { &NoViewer } else { &WindowViewer };
    stagioni
        .plot(today, &cli.theme(), Path::new(OUTPUT_PATH), viewer)
        .await
}
