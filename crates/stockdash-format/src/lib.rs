//! Output formatters for stockdash reports.
//!
//! - [`HtmlFormatter`] - self-contained HTML with inline SVG charts
//! - [`JsonFormatter`] - the figure model as JSON

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod html;
mod json;
mod svg;

pub use formatter::{FormatError, Formatter, OutputFormat};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
