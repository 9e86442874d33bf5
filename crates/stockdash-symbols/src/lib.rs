//! Symbol list loading for stockdash.
//!
//! # Example
//!
//! ```
//! use stockdash_symbols::parse_symbols;
//!
//! let tickers = parse_symbols("aapl\nmsft,Microsoft\n\ngoog\n".as_bytes()).unwrap();
//! let names: Vec<_> = tickers.iter().map(|t| t.as_str()).collect();
//! assert_eq!(names, ["AAPL", "MSFT", "GOOG"]);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use stockdash_types::{DashboardError, Ticker};

/// Reads tickers from a symbol file, in file order.
///
/// # Errors
///
/// Returns [`DashboardError::Config`] if the file cannot be opened or is not
/// valid delimited text.
pub fn load_symbols(path: impl AsRef<Path>) -> Result<Vec<Ticker>, DashboardError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        DashboardError::config(format!("cannot open symbol file {}: {e}", path.display()))
    })?;

    let tickers = parse_symbols(file).map_err(|e| {
        DashboardError::config(format!("cannot read symbol file {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), count = tickers.len(), "loaded symbols");
    Ok(tickers)
}

/// Parses tickers from any reader.
///
/// Each record contributes its first field. Records whose first field is
/// blank are skipped; lines starting with `#` are treated as comments.
///
/// # Errors
///
/// Returns the underlying `csv` error on I/O failure or invalid UTF-8.
pub fn parse_symbols<R: Read>(reader: R) -> Result<Vec<Ticker>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut tickers = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(ticker) = record.get(0).and_then(Ticker::new) {
            tickers.push(ticker);
        }
    }
    Ok(tickers)
}
