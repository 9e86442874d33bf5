//! JSON output format.

use std::io::Write;
use stockdash_chart::Report;

use crate::{FormatError, Formatter};

/// Writes the report's figure model as a single JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &Report,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, report)?;
        } else {
            serde_json::to_writer(&mut writer, report)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
