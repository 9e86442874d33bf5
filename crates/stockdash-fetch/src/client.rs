//! HTTP client for the Yahoo Finance chart API.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use stockdash_types::{DateRange, OhlcvSeries, SeriesError, Ticker};
use thiserror::Error;

use crate::{ChartEnvelope, url::chart_url};

/// Configuration for the chart API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the query API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::url::BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // The chart API rejects requests without a browser-like agent.
            user_agent: format!(
                "Mozilla/5.0 (compatible; stockdash/{})",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// Errors that can occur while fetching a ticker's history.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot be used.
    #[error("Invalid base URL '{base}': {reason}")]
    InvalidUrl {
        /// The base URL.
        base: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A successful response body was not valid chart JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server returned an error status without a decodable error body.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The API reported an error (unknown or delisted symbol).
    #[error("{code}: {description}")]
    Api {
        /// Error code reported by the API.
        code: String,
        /// Error description reported by the API.
        description: String,
    },

    /// The response held no complete rows.
    #[error("no price rows in response")]
    Empty,

    /// The rows did not form a valid series.
    #[error("invalid series: {0}")]
    Series(#[from] SeriesError),
}

/// Chart API client with connection pooling.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    config: ClientConfig,
}

impl YahooClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Downloads the daily history of `ticker` over `range`.
    ///
    /// A single request is made; failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response holds no usable rows.
    pub async fn fetch_daily(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<OhlcvSeries, FetchError> {
        let url = chart_url(&self.config.base_url, ticker, range)?;
        tracing::debug!(%ticker, %url, "fetching daily history");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let envelope = decode_chart(status, &body)?;

        let series = envelope.into_series(ticker, range)?;
        tracing::debug!(%ticker, bars = series.len(), "fetched daily history");
        Ok(series)
    }
}

/// Interprets a chart API response from its status and body.
///
/// Unknown symbols come back as 404 with an error object in the body; any
/// other failed status becomes [`FetchError::Status`].
pub(crate) fn decode_chart(status: StatusCode, body: &[u8]) -> Result<ChartEnvelope, FetchError> {
    let envelope: ChartEnvelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !status.is_success() {
        return Err(envelope.api_error().unwrap_or(FetchError::Status {
            status: status.as_u16(),
        }));
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.contains("stockdash/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = YahooClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_decode_error_status_with_error_object() {
        let body = br#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        match decode_chart(StatusCode::NOT_FOUND, body) {
            Err(FetchError::Api { code, description }) => {
                assert_eq!(code, "Not Found");
                assert_eq!(description, "No data found, symbol may be delisted");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_status_with_undecodable_body() {
        let body = b"<html><body>Service Unavailable</body></html>";
        assert!(matches!(
            decode_chart(StatusCode::SERVICE_UNAVAILABLE, body),
            Err(FetchError::Status { status: 503 })
        ));
    }

    #[test]
    fn test_decode_error_status_without_error_object() {
        let body = br#"{"chart":{"result":null,"error":null}}"#;
        assert!(matches!(
            decode_chart(StatusCode::TOO_MANY_REQUESTS, body),
            Err(FetchError::Status { status: 429 })
        ));
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"chart":{"result":null,"error":null}}"#;
        assert!(decode_chart(StatusCode::OK, body).is_ok());
        assert!(matches!(
            decode_chart(StatusCode::OK, b"not json"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::Api {
            code: "Not Found".to_string(),
            description: "No data found, symbol may be delisted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not Found: No data found, symbol may be delisted"
        );
        assert_eq!(
            FetchError::Status { status: 429 }.to_string(),
            "Server returned status 429"
        );
    }
}
