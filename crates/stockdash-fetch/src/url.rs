//! Yahoo Finance URL construction.

use reqwest::Url;
use stockdash_types::{DateRange, Ticker};

use crate::FetchError;

/// Base URL for the Yahoo Finance query API.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Builds the daily chart URL for a ticker and date range.
///
/// URL format: `{base}/v8/finance/chart/{SYMBOL}?period1={start}&period2={end}&interval=1d&events=history`
///
/// `period1`/`period2` are Unix seconds; `period2` is exclusive. The ticker
/// is percent-encoded as a single path segment.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if `base` is not an absolute URL that
/// can carry a path.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stockdash_fetch::url::{BASE_URL, chart_url};
/// use stockdash_types::{DateRange, Ticker};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let url = chart_url(BASE_URL, &Ticker::new("aapl").unwrap(), DateRange::single_day(day)).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?period1=1705276800&period2=1705363200&interval=1d&events=history"
/// );
/// ```
pub fn chart_url(base: &str, ticker: &Ticker, range: DateRange) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        base: base.to_string(),
        reason,
    };
    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(["v8", "finance", "chart", ticker.as_str()]);

    let (period1, period2) = range.unix_bounds();
    url.query_pairs_mut()
        .append_pair("period1", &period1.to_string())
        .append_pair("period2", &period2.to_string())
        .append_pair("interval", "1d")
        .append_pair("events", "history");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_chart_url_range() {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2018, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();
        let url = chart_url(BASE_URL, &Ticker::new("msft").unwrap(), range).unwrap();
        let url = url.as_str();

        assert!(url.starts_with("https://query1.finance.yahoo.com/v8/finance/chart/MSFT?"));
        assert!(url.contains("period1=1514764800"));
        assert!(url.contains("period2=1517443200"));
        assert!(url.ends_with("interval=1d&events=history"));
    }

    #[test]
    fn test_chart_url_trailing_slash() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let url = chart_url(
            "http://localhost:8080/",
            &Ticker::new("SPY").unwrap(),
            DateRange::single_day(day),
        )
        .unwrap();
        assert!(url.as_str().starts_with("http://localhost:8080/v8/finance/chart/SPY?"));
    }

    #[test]
    fn test_chart_url_encodes_ticker_segment() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let ticker = Ticker::new("brk/b?x#y").unwrap();
        let url = chart_url(BASE_URL, &ticker, DateRange::single_day(day)).unwrap();

        assert_eq!(url.path(), "/v8/finance/chart/BRK%2FB%3FX%23Y");
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query_pairs().count(), 4);
    }

    #[test]
    fn test_chart_url_rejects_relative_base() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let err = chart_url("not a url", &Ticker::new("SPY").unwrap(), DateRange::single_day(day))
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
