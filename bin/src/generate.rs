//! The dashboard run with progress display.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use stockdash_lib::prelude::*;

use crate::display::summary_message;

/// Fetches, charts and writes the dashboard described by `config`.
pub(crate) async fn generate(
    config: &DashboardConfig,
    progress: &ProgressBar,
    quiet: bool,
) -> Result<()> {
    let client = YahooClient::with_defaults().context("Failed to create HTTP client")?;

    let summary = run_with_progress(&client, config, |event| match event {
        RunProgress::Started { symbols } => progress.set_length(symbols as u64),
        RunProgress::Symbol(outcome) => {
            progress.set_message(outcome.ticker().to_string());
            progress.inc(1);
        }
    })
    .await
    .inspect_err(|_| progress.abandon())?;
    progress.finish_with_message(summary_message(&summary));

    if !quiet {
        println!("Dashboard written to: {}", config.output.display());
    }
    Ok(())
}
