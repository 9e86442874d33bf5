//! Daily OHLCV bars and the series that hold them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Ticker;

/// A single trading day's open/high/low/close/volume record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date (exchange local).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price of the day.
    pub high: f64,
    /// Lowest price of the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if the bar closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Error returned when bars do not form a valid series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Bars are not strictly increasing by date.
    #[error("bar dated {date} does not follow {previous}")]
    OutOfOrder {
        /// Date of the preceding bar.
        previous: NaiveDate,
        /// Offending date.
        date: NaiveDate,
    },
}

/// Daily OHLCV history for one ticker, strictly increasing by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcvSeries {
    ticker: Ticker,
    bars: Vec<Bar>,
}

impl OhlcvSeries {
    /// Creates a series, validating that dates are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OutOfOrder`] on the first repeated or
    /// decreasing date.
    pub fn new(ticker: Ticker, bars: Vec<Bar>) -> Result<Self, SeriesError> {
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(SeriesError::OutOfOrder {
                previous: pair[0].date,
                date: pair[1].date,
            });
        }
        Ok(Self { ticker, bars })
    }

    /// Returns the ticker this series belongs to.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Returns the bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the date index of the series.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Returns the closing prices in date order.
    pub fn closes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.bars.iter().map(|b| b.close)
    }

    /// Returns the first and last dates, or `None` for an empty series.
    #[must_use]
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.bars.first()?.date, self.bars.last()?.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn bar(d: u32, close: f64) -> Bar {
        Bar::new(day(d), close - 1.0, close + 1.0, close - 2.0, close, 1000.0)
    }

    #[test]
    fn test_series_accepts_increasing_dates() {
        let ticker = Ticker::new("AAPL").unwrap();
        let series = OhlcvSeries::new(ticker, vec![bar(2, 10.0), bar(3, 11.0)]).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates(), vec![day(2), day(3)]);
        assert_eq!(series.closes().collect::<Vec<_>>(), vec![10.0, 11.0]);
        assert_eq!(series.span(), Some((day(2), day(3))));
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let ticker = Ticker::new("AAPL").unwrap();
        let err = OhlcvSeries::new(ticker, vec![bar(3, 10.0), bar(3, 11.0)]).unwrap_err();

        assert_eq!(
            err,
            SeriesError::OutOfOrder {
                previous: day(3),
                date: day(3)
            }
        );
    }

    #[test]
    fn test_empty_series() {
        let series = OhlcvSeries::new(Ticker::new("X").unwrap(), Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.span(), None);
    }

    #[test]
    fn test_bar_serializes_date_as_iso() {
        let json = serde_json::to_string(&bar(5, 10.0)).unwrap();
        assert!(json.contains("\"date\":\"2024-01-05\""));
    }
}
