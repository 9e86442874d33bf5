//! Run configuration.

use chrono::NaiveDate;
use std::path::PathBuf;
use stockdash_chart::ChartOptions;
use stockdash_format::OutputFormat;
use stockdash_indicators::IndicatorSet;
use stockdash_types::{DashboardError, DateRange, Result};

/// Everything a dashboard run needs, built once and passed by reference.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Symbol list to read.
    pub symbols_path: PathBuf,
    /// First date to fetch (inclusive).
    pub start: NaiveDate,
    /// Last date to fetch (inclusive), normally today.
    pub end: NaiveDate,
    /// Indicators to compute for every ticker.
    pub indicators: IndicatorSet,
    /// Report destination.
    pub output: PathBuf,
    /// Report format.
    pub format: OutputFormat,
    /// Maximum number of tickers fetched at once.
    pub concurrency: usize,
    /// Chart layout and styling.
    pub chart: ChartOptions,
}

impl DashboardConfig {
    /// Default symbol file.
    pub const DEFAULT_SYMBOLS_PATH: &'static str = "stocks.csv";
    /// Default start date.
    pub const DEFAULT_START: &'static str = "2018-01-01";
    /// Default indicator list.
    pub const DEFAULT_INDICATORS: &'static str = "MA50,MA200";
    /// Default report path.
    pub const DEFAULT_OUTPUT: &'static str = "dashboard1.html";
    /// Default number of concurrent fetches.
    pub const DEFAULT_CONCURRENCY: usize = 4;

    /// Parses a `YYYY-MM-DD` start date.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] for a malformed date.
    pub fn parse_start(s: &str) -> Result<NaiveDate> {
        DateRange::parse_date(s).map_err(DashboardError::config)
    }

    /// Returns the inclusive fetch range.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if the start date is after the end
    /// date.
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end).map_err(DashboardError::config)
    }

    /// Checks the configuration before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] for an empty date range or a zero
    /// concurrency limit.
    pub fn validate(&self) -> Result<()> {
        self.date_range()?;
        if self.concurrency == 0 {
            return Err(DashboardError::config("concurrency must be at least 1"));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            symbols_path: PathBuf::from(Self::DEFAULT_SYMBOLS_PATH),
            start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or(NaiveDate::MIN),
            end: chrono::Utc::now().date_naive(),
            indicators: IndicatorSet::parse(Self::DEFAULT_INDICATORS),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            format: OutputFormat::default(),
            concurrency: Self::DEFAULT_CONCURRENCY,
            chart: ChartOptions::default(),
        }
    }
}
