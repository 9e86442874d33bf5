//! The dashboard pipeline: symbols in, one report out.
//!
//! Each ticker runs fetch, compute and compose independently. A failure is
//! reported as a [`SymbolOutcome::Skipped`] and never affects the other
//! tickers. Only configuration errors and report writes fail a run.

use futures::{Stream, StreamExt, stream};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use stockdash_chart::{Figure, Report, compose};
use stockdash_fetch::PriceSource;
use stockdash_format::OutputFormat;
use stockdash_symbols::load_symbols;
use stockdash_types::{DashboardError, DateRange, Result, Ticker};

use crate::DashboardConfig;

/// What happened to one ticker.
#[derive(Debug)]
pub enum SymbolOutcome {
    /// The ticker was fetched and charted.
    Charted {
        /// The ticker.
        ticker: Ticker,
        /// Its composed chart.
        figure: Figure,
    },
    /// The ticker produced no chart.
    Skipped {
        /// The ticker.
        ticker: Ticker,
        /// Why it was skipped; always a per-symbol error.
        error: DashboardError,
    },
}

impl SymbolOutcome {
    /// Returns the ticker this outcome belongs to.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        match self {
            Self::Charted { ticker, .. } | Self::Skipped { ticker, .. } => ticker,
        }
    }

    /// Returns true if a chart was produced.
    #[must_use]
    pub const fn is_charted(&self) -> bool {
        matches!(self, Self::Charted { .. })
    }
}

/// A progress event emitted by [`run_with_progress`].
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// The symbol file was loaded.
    Started {
        /// Number of tickers to process.
        symbols: usize,
    },
    /// One ticker finished, in input order.
    Symbol(&'a SymbolOutcome),
}

/// Counts of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tickers read from the symbol file.
    pub requested: usize,
    /// Tickers that made it into the report.
    pub charted: usize,
    /// Tickers skipped, in input order.
    pub skipped: Vec<Ticker>,
}

/// Fetches, computes and composes the chart for a single ticker.
///
/// # Errors
///
/// Returns [`DashboardError::DataUnavailable`] if the source has no usable
/// history and [`DashboardError::Indicator`] if an indicator cannot be
/// built.
pub async fn chart_symbol<S>(
    source: &S,
    ticker: &Ticker,
    range: DateRange,
    config: &DashboardConfig,
) -> Result<Figure>
where
    S: PriceSource + ?Sized,
{
    let series = source
        .daily_history(ticker, range)
        .await
        .map_err(|e| DashboardError::DataUnavailable {
            ticker: ticker.clone(),
            reason: e.to_string(),
        })?;
    tracing::debug!(%ticker, bars = series.len(), "fetched history");

    let indicators = config
        .indicators
        .compute_all(&series)
        .map_err(|e| DashboardError::Indicator {
            ticker: ticker.clone(),
            reason: e.to_string(),
        })?;

    Ok(compose(&series, &indicators, &config.chart))
}

async fn process_symbol<S>(
    source: &S,
    ticker: Ticker,
    range: DateRange,
    config: &DashboardConfig,
) -> SymbolOutcome
where
    S: PriceSource + ?Sized,
{
    match chart_symbol(source, &ticker, range, config).await {
        Ok(figure) => SymbolOutcome::Charted { ticker, figure },
        Err(error) => {
            tracing::warn!(%ticker, %error, "skipping symbol");
            SymbolOutcome::Skipped { ticker, error }
        }
    }
}

/// Streams one outcome per ticker, in input order.
///
/// Up to `config.concurrency` tickers are in flight at once; outcomes are
/// still yielded in the order of `tickers`.
///
/// # Errors
///
/// Returns [`DashboardError::Config`] if the configured date range is empty.
pub fn symbol_outcomes<'a, S>(
    source: &'a S,
    tickers: Vec<Ticker>,
    config: &'a DashboardConfig,
) -> Result<impl Stream<Item = SymbolOutcome> + 'a>
where
    S: PriceSource + ?Sized,
{
    let range = config.date_range()?;
    Ok(stream::iter(tickers)
        .map(move |ticker| process_symbol(source, ticker, range, config))
        .buffered(config.concurrency.max(1)))
}

/// Drains `outcomes` into a report, calling `on_outcome` for each one.
pub async fn collect_report<St, F>(outcomes: St, mut on_outcome: F) -> (Report, RunSummary)
where
    St: Stream<Item = SymbolOutcome>,
    F: FnMut(&SymbolOutcome),
{
    let mut report = Report::default();
    let mut summary = RunSummary::default();
    let mut outcomes = std::pin::pin!(outcomes);

    while let Some(outcome) = outcomes.next().await {
        on_outcome(&outcome);
        summary.requested += 1;
        match outcome {
            SymbolOutcome::Charted { ticker, figure } => {
                summary.charted += 1;
                report.push(ticker, figure);
            }
            SymbolOutcome::Skipped { ticker, .. } => summary.skipped.push(ticker),
        }
    }
    (report, summary)
}

/// Builds the report for `tickers` without writing it.
///
/// # Errors
///
/// Returns [`DashboardError::Config`] if the configured date range is empty.
pub async fn build_report<S>(
    source: &S,
    tickers: Vec<Ticker>,
    config: &DashboardConfig,
) -> Result<(Report, RunSummary)>
where
    S: PriceSource + ?Sized,
{
    let outcomes = symbol_outcomes(source, tickers, config)?;
    Ok(collect_report(outcomes, |_| {}).await)
}

/// Writes `report` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`DashboardError::Write`] if the file cannot be created or
/// written.
pub fn write_report(report: &Report, path: &Path, format: OutputFormat) -> Result<()> {
    let write_error = |reason: String| DashboardError::Write {
        path: path.to_path_buf(),
        reason,
    };
    let file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    format
        .write_report(report, BufWriter::new(file))
        .map_err(|e| write_error(e.to_string()))?;
    tracing::debug!(path = %path.display(), sections = report.len(), %format, "report written");
    Ok(())
}

/// Runs the whole pipeline: load symbols, chart each ticker, write the
/// report.
///
/// # Errors
///
/// Fails only for configuration errors (bad date range, unreadable symbol
/// file) or if the report cannot be written. Per-ticker failures are logged
/// and listed in the returned summary.
pub async fn run<S>(source: &S, config: &DashboardConfig) -> Result<RunSummary>
where
    S: PriceSource + ?Sized,
{
    run_with_progress(source, config, |_| {}).await
}

/// Like [`run`], reporting each step to `on_progress`.
///
/// # Errors
///
/// Same as [`run`].
pub async fn run_with_progress<S, F>(
    source: &S,
    config: &DashboardConfig,
    mut on_progress: F,
) -> Result<RunSummary>
where
    S: PriceSource + ?Sized,
    F: FnMut(RunProgress<'_>),
{
    config.validate()?;
    let tickers = load_symbols(&config.symbols_path)?;
    tracing::info!(
        symbols = tickers.len(),
        indicators = %config.indicators,
        start = %config.start,
        end = %config.end,
        "building dashboard"
    );
    on_progress(RunProgress::Started {
        symbols: tickers.len(),
    });

    let outcomes = symbol_outcomes(source, tickers, config)?;
    let (report, summary) =
        collect_report(outcomes, |outcome| on_progress(RunProgress::Symbol(outcome))).await;
    write_report(&report, &config.output, config.format)?;
    tracing::info!(
        charted = summary.charted,
        skipped = summary.skipped.len(),
        output = %config.output.display(),
        "dashboard written"
    );
    Ok(summary)
}
