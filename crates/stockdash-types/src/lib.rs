//! Core types for the stockdash dashboard generator.
//!
//! This crate provides the fundamental data structures used throughout stockdash:
//!
//! - [`Ticker`] - A normalized stock symbol
//! - [`Bar`] - A single daily OHLCV record
//! - [`OhlcvSeries`] - A date-ordered sequence of bars for one ticker
//! - [`DateRange`] - Inclusive date range for data retrieval
//! - [`DashboardError`] - The error kinds surfaced by the pipeline

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod date_range;
mod error;
mod ticker;

pub use bar::{Bar, OhlcvSeries, SeriesError};
pub use date_range::DateRange;
pub use error::{DashboardError, DateRangeError, Result};
pub use ticker::Ticker;
