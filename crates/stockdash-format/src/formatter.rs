//! Output format abstraction.

use std::io::Write;
use stockdash_chart::Report;
use thiserror::Error;

use crate::{HtmlFormatter, JsonFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Self-contained HTML page.
    #[default]
    Html,
    /// JSON figure model.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Html, Self::Json]
    }

    /// Writes `report` with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_report<W: Write + Send>(
        self,
        report: &Report,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Html => HtmlFormatter::new().write_report(report, writer),
            Self::Json => JsonFormatter::new().with_pretty(true).write_report(report, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report writers.
pub trait Formatter: Send + Sync {
    /// Writes the whole report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_report<W: Write + Send>(&self, report: &Report, writer: W)
    -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
