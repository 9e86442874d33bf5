//! Technical indicators for stockdash.
//!
//! Two layers live here:
//!
//! - Streaming indicators ([`Sma`], [`Ema`], [`Macd`], [`Rsi`],
//!   [`BollingerBands`], [`Ichimoku`]) implementing the [`Indicator`] trait.
//! - The engine: [`IndicatorKind`] names one of the supported indicators and
//!   [`IndicatorKind::compute`] turns an [`OhlcvSeries`] into an
//!   [`IndicatorSeries`] aligned to the same date index.
//!
//! ```
//! use chrono::NaiveDate;
//! use stockdash_indicators::{IndicatorSet, LineRole};
//! use stockdash_types::{Bar, OhlcvSeries, Ticker};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bars = (0..60)
//!     .map(|i| {
//!         let date = start + chrono::Days::new(i);
//!         Bar::new(date, 10.0, 11.0, 9.0, 10.0, 1_000.0)
//!     })
//!     .collect();
//! let series = OhlcvSeries::new(Ticker::new("ACME").unwrap(), bars).unwrap();
//!
//! let set = IndicatorSet::parse("ma50,NotAnIndicator");
//! let computed = set.compute_all(&series).unwrap();
//! assert_eq!(computed.len(), 1);
//! let ma = computed[0].line(LineRole::Value).unwrap();
//! assert_eq!(ma.values[49], Some(10.0));
//! ```
//!
//! [`OhlcvSeries`]: stockdash_types::OhlcvSeries

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bollinger;
mod ema;
mod engine;
mod ichimoku;
mod indicator;
mod kind;
mod macd;
mod rsi;
mod series;
mod sma;

pub use bollinger::{BollingerBands, BollingerOutput};
pub use ema::Ema;
pub use engine::{shift_backward, shift_forward};
pub use ichimoku::{Ichimoku, IchimokuOutput};
pub use indicator::{Indicator, IndicatorError};
pub use kind::{IndicatorKind, IndicatorParseError, IndicatorSet};
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use series::{IndicatorLine, IndicatorSeries, LineRole};
pub use sma::Sma;
