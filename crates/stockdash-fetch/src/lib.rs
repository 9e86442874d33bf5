//! Historical price fetching for stockdash.
//!
//! This crate provides the data download step of the pipeline:
//!
//! - [`url::chart_url`] - Constructs Yahoo Finance chart URLs
//! - [`YahooClient`] - HTTP client for the chart API
//! - [`ChartEnvelope`] - Wire format of the chart API response
//! - [`PriceSource`] - Provider abstraction used by the pipeline

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod response;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, YahooClient};
pub use response::ChartEnvelope;
pub use source::PriceSource;
