use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stagioni::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stagioni=info,stagioni_yfinance=info")),
        )
        .init();

    let cli = Cli::parse();
    let spec = stagioni::app::run(&cli).await?;
    tracing::info!(lines = spec.lines.len(), "done");
    Ok(())
}
