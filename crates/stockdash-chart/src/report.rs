//! The ordered collection of per-ticker charts written as one document.

use serde::Serialize;
use stockdash_types::Ticker;

use crate::Figure;

/// One ticker's chart within a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSection {
    /// Ticker the chart belongs to.
    pub ticker: Ticker,
    /// The composed chart.
    pub figure: Figure,
}

/// An ordered sequence of chart sections.
///
/// Sections keep the order in which they were pushed, which the pipeline
/// guarantees is the order of the symbol file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    title: String,
    sections: Vec<ChartSection>,
}

impl Report {
    /// Creates an empty report with a document title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    pub fn push(&mut self, ticker: Ticker, figure: Figure) {
        self.sections.push(ChartSection { ticker, figure });
    }

    /// Returns the document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the sections in order.
    #[must_use]
    pub fn sections(&self) -> &[ChartSection] {
        &self.sections
    }

    /// Returns the tickers of all sections, in order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.sections.iter().map(|s| &s.ticker)
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the report has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new("Stock dashboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChartOptions, compose};
    use stockdash_types::OhlcvSeries;

    fn empty_figure(symbol: &str) -> (Ticker, Figure) {
        let ticker = Ticker::new(symbol).unwrap();
        let series = OhlcvSeries::new(ticker.clone(), Vec::new()).unwrap();
        (ticker, compose(&series, &[], &ChartOptions::default()))
    }

    #[test]
    fn test_sections_keep_push_order() {
        let mut report = Report::default();
        for symbol in ["ibm", "aapl", "ibm"] {
            let (ticker, figure) = empty_figure(symbol);
            report.push(ticker, figure);
        }
        let tickers: Vec<_> = report.tickers().map(Ticker::as_str).collect();
        assert_eq!(tickers, vec!["IBM", "AAPL", "IBM"]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_default_report_is_empty() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.title(), "Stock dashboard");
    }

    #[test]
    fn test_serializes_ticker_as_string() {
        let mut report = Report::default();
        let (ticker, figure) = empty_figure("t");
        report.push(ticker, figure);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"][0]["ticker"], "T");
        assert_eq!(json["sections"][0]["figure"]["title"], "T historical price chart");
    }
}
