//! Stock dashboard generator.
//!
//! This is a facade crate that re-exports functionality from the stockdash
//! workspace crates and owns the [`run`] pipeline.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockdash_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YahooClient::with_defaults()?;
//!     let config = DashboardConfig {
//!         indicators: IndicatorSet::parse("MA50,RSI,BollingerBands"),
//!         ..DashboardConfig::default()
//!     };
//!
//!     let summary = run(&client, &config).await?;
//!     println!("{} charted, {} skipped", summary.charted, summary.skipped.len());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod pipeline;

pub use config::DashboardConfig;
pub use pipeline::{
    RunProgress, RunSummary, SymbolOutcome, build_report, chart_symbol, collect_report, run,
    run_with_progress, symbol_outcomes, write_report,
};

// Re-export core types
pub use stockdash_types::*;

// Re-export symbol loading
pub use stockdash_symbols::{load_symbols, parse_symbols};

// Re-export fetch functionality
pub use stockdash_fetch::{ClientConfig, FetchError, PriceSource, YahooClient};

// Re-export indicators
pub use stockdash_indicators::{
    Indicator, IndicatorError, IndicatorKind, IndicatorLine, IndicatorSeries, IndicatorSet,
    LineRole,
};

// Re-export charts
pub use stockdash_chart::{ChartOptions, ChartSection, Figure, Panel, PanelKind, Report, Trace, compose};

// Re-export formatters
pub use stockdash_format::{FormatError, Formatter, HtmlFormatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use stockdash_lib::prelude::*;
/// ```
pub mod prelude {
    pub use stockdash_types::{
        Bar, DashboardError, DateRange, DateRangeError, OhlcvSeries, Result, Ticker,
    };

    pub use stockdash_symbols::load_symbols;

    pub use stockdash_fetch::{ClientConfig, PriceSource, YahooClient};

    pub use stockdash_indicators::{IndicatorKind, IndicatorSeries, IndicatorSet, LineRole};

    pub use stockdash_chart::{ChartOptions, Figure, Report, compose};

    pub use stockdash_format::{Formatter, HtmlFormatter, JsonFormatter, OutputFormat};

    pub use crate::{
        DashboardConfig, RunProgress, RunSummary, SymbolOutcome, build_report, run,
        run_with_progress, symbol_outcomes, write_report,
    };
}
