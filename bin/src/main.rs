//! stockdash CLI - technical-indicator dashboards for a list of stocks.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use stockdash_lib::{DashboardConfig, IndicatorSet};

mod display;
mod generate;
mod logging;

use display::Format;

#[derive(Debug, Parser)]
#[command(name = "stockdash")]
#[command(about = "Chart technical indicators for a list of stock symbols into one HTML report", long_about = None)]
#[command(version)]
struct Cli {
    /// Symbol file: one ticker per line, first comma-separated field is used
    #[arg(short = 'c', long = "csv_file", default_value = DashboardConfig::DEFAULT_SYMBOLS_PATH)]
    csv_file: PathBuf,

    /// Start date (YYYY-MM-DD), inclusive. Data runs through today.
    #[arg(short = 's', long = "start_date", default_value = DashboardConfig::DEFAULT_START)]
    start_date: String,

    /// Comma-separated indicators: MA20, MA50, MA200, MACD, RSI, BollingerBands, Ichimoku
    #[arg(short, long, default_value = DashboardConfig::DEFAULT_INDICATORS)]
    indicators: String,

    /// Report output path
    #[arg(short, long, default_value = DashboardConfig::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Maximum number of symbols fetched concurrently
    #[arg(long, default_value_t = DashboardConfig::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Builds the run configuration; `today` is the last date fetched.
    fn into_config(self, today: NaiveDate) -> stockdash_lib::Result<DashboardConfig> {
        let config = DashboardConfig {
            symbols_path: self.csv_file,
            start: DashboardConfig::parse_start(&self.start_date)?,
            end: today,
            indicators: IndicatorSet::parse(&self.indicators),
            output: self.output,
            format: self.format.into(),
            concurrency: self.concurrency,
            ..DashboardConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let progress = display::progress_bar(quiet);
    logging::init(cli.verbose, progress.clone());

    let config = cli.into_config(chrono::Utc::now().date_naive())?;
    generate::generate(&config, &progress, quiet).await
}
