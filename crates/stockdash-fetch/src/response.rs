//! Chart API response decoding.

use chrono::DateTime;
use serde::Deserialize;
use stockdash_types::{Bar, DateRange, OhlcvSeries, Ticker};

use crate::FetchError;

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Returns the API error carried by the response, if any.
    pub(crate) fn api_error(&self) -> Option<FetchError> {
        self.chart.error.as_ref().map(|e| FetchError::Api {
            code: e.code.clone(),
            description: e.description.clone(),
        })
    }

    /// Converts the response into a validated series.
    ///
    /// Rows with any missing field are dropped, timestamps are mapped to the
    /// exchange's local calendar date, rows outside `range` are discarded and
    /// a repeated date keeps the last row.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Api`] if the response carries an error object and
    /// [`FetchError::Empty`] if no complete row remains.
    pub fn into_series(self, ticker: &Ticker, range: DateRange) -> Result<OhlcvSeries, FetchError> {
        if let Some(err) = self.api_error() {
            return Err(err);
        }

        let Some(result) = self.chart.result.and_then(|r| r.into_iter().next()) else {
            return Err(FetchError::Empty);
        };
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
        let offset = result.meta.gmtoffset;

        let mut rows: Vec<Bar> = result
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
                let field = |column: &[Option<f64>]| column.get(i).copied().flatten();
                Some(Bar::new(
                    date,
                    field(&quote.open[..])?,
                    field(&quote.high[..])?,
                    field(&quote.low[..])?,
                    field(&quote.close[..])?,
                    field(&quote.volume[..])?,
                ))
            })
            .filter(|bar| range.contains(bar.date))
            .collect();

        rows.sort_by_key(|bar| bar.date);
        let mut bars: Vec<Bar> = Vec::with_capacity(rows.len());
        for bar in rows {
            match bars.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => bars.push(bar),
            }
        }

        if bars.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(OhlcvSeries::new(ticker.clone(), bars)?)
    }
}
