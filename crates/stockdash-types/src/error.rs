//! Error types for stockdash.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::Ticker;

/// Result type alias for stockdash operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that can occur while building a dashboard.
///
/// `Config` and `Write` are fatal to the whole run. `DataUnavailable` and
/// `Indicator` are scoped to a single ticker; the pipeline logs them and
/// moves on to the next symbol.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Invalid user input (bad date, unreadable symbol file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The data source returned no usable data for a ticker.
    #[error("No data available for {ticker}: {reason}")]
    DataUnavailable {
        /// The ticker whose fetch failed.
        ticker: Ticker,
        /// Human-readable cause reported by the fetcher.
        reason: String,
    },

    /// An indicator could not be computed for a ticker.
    #[error("Indicator error for {ticker}: {reason}")]
    Indicator {
        /// The ticker being processed.
        ticker: Ticker,
        /// Human-readable cause.
        reason: String,
    },

    /// The report could not be written.
    #[error("Failed to write report to {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Human-readable cause.
        reason: String,
    },
}

impl DashboardError {
    /// Creates a configuration error from any displayable message.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Returns true if this error only affects a single ticker.
    #[must_use]
    pub const fn is_per_symbol(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. } | Self::Indicator { .. })
    }
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// The date string did not match `YYYY-MM-DD`.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_symbol_classification() {
        let ticker = Ticker::new("aapl").unwrap();
        let unavailable = DashboardError::DataUnavailable {
            ticker,
            reason: "empty".to_string(),
        };
        assert!(unavailable.is_per_symbol());
        assert!(!DashboardError::config("bad date").is_per_symbol());
    }

    #[test]
    fn test_write_error_message() {
        let err = DashboardError::Write {
            path: PathBuf::from("/nope/out.html"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write report to /nope/out.html: permission denied"
        );
    }
}
