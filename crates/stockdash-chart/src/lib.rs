//! Chart composition for stockdash.
//!
//! - [`compose`] - Builds one [`Figure`] from a price series and its indicators
//! - [`Report`] - Ordered chart sections, one per ticker

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compose;
mod figure;
mod report;

pub use compose::{ChartOptions, RSI_REFERENCE_LEVELS, compose};
pub use figure::{Figure, Panel, PanelKind, Trace};
pub use report::{ChartSection, Report};
