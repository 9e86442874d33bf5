//! Self-contained HTML output format.

use std::io::Write;
use stockdash_chart::Report;

use crate::svg::{escape, render_figure};
use crate::{FormatError, Formatter};

const STYLE: &str = "\
body{margin:0;padding:24px;background:#f4f6f9;font-family:-apple-system,'Segoe UI',Helvetica,Arial,sans-serif;color:#1f2933}
h1{margin:0 0 8px;font-size:24px}
nav{margin:0 0 24px;font-size:14px}
nav a{margin-right:12px;color:#2b5797;text-decoration:none}
section.chart{margin:0 0 32px}
section.chart svg{max-width:100%;height:auto;box-shadow:0 1px 3px rgba(0,0,0,.15)}
p.empty{color:#52606d}
svg text{font-size:11px;fill:#323f4b}
svg text.figure-title{font-size:17px;font-weight:600}
svg text.panel-title{font-size:12px;font-weight:600}
svg .candle line{stroke-width:1}
";

/// Writes a report as one HTML page with an inline SVG chart per section.
///
/// The page has no scripts and no external stylesheets. Each candle carries
/// a `<title>` element, which browsers show as a hover tooltip.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Creates a new HTML formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for HtmlFormatter {
    fn write_report<W: Write + Send>(
        &self,
        report: &Report,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let title = escape(report.title());
        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, r#"<html lang="en">"#)?;
        writeln!(writer, "<head>")?;
        writeln!(writer, r#"<meta charset="utf-8">"#)?;
        writeln!(writer, "<title>{title}</title>")?;
        writeln!(writer, "<style>\n{STYLE}</style>")?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        writeln!(writer, "<h1>{title}</h1>")?;

        if report.is_empty() {
            writeln!(writer, r#"<p class="empty">No charts were produced.</p>"#)?;
        } else {
            write!(writer, "<nav>")?;
            for (index, ticker) in report.tickers().enumerate() {
                write!(
                    writer,
                    r##"<a href="#{}">{}</a>"##,
                    section_id(index, ticker.as_str()),
                    escape(ticker.as_str())
                )?;
            }
            writeln!(writer, "</nav>")?;
        }

        for (index, section) in report.sections().iter().enumerate() {
            writeln!(
                writer,
                r#"<section class="chart" id="{}">"#,
                section_id(index, section.ticker.as_str())
            )?;
            render_figure(&section.figure, &mut writer)?;
            writeln!(writer, "</section>")?;
        }

        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "html"
    }
}

/// Anchor id for a section; the index keeps repeated tickers distinct.
fn section_id(index: usize, ticker: &str) -> String {
    let slug: String = ticker
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("chart-{index}-{slug}")
}
