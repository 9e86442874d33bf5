//! Price source abstraction.

use async_trait::async_trait;
use stockdash_types::{DateRange, OhlcvSeries, Ticker};

use crate::{FetchError, YahooClient};

/// A provider of daily OHLCV history.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Returns the daily history of `ticker` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider has no usable data for the ticker.
    async fn daily_history(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<OhlcvSeries, FetchError>;
}

#[async_trait]
impl PriceSource for YahooClient {
    async fn daily_history(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<OhlcvSeries, FetchError> {
        self.fetch_daily(ticker, range).await
    }
}
