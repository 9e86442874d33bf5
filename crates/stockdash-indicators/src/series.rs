//! Date-aligned indicator output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::IndicatorKind;

/// Identifies a line within a (possibly multi-line) indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// The only line of a single-line indicator (moving averages, RSI).
    Value,
    /// MACD line.
    Macd,
    /// MACD signal line.
    Signal,
    /// MACD histogram.
    Histogram,
    /// Upper Bollinger band.
    Upper,
    /// Middle Bollinger band.
    Middle,
    /// Lower Bollinger band.
    Lower,
    /// Ichimoku Tenkan-sen.
    Conversion,
    /// Ichimoku Kijun-sen.
    Base,
    /// Ichimoku Senkou span A.
    SpanA,
    /// Ichimoku Senkou span B.
    SpanB,
    /// Ichimoku Chikou span.
    Lagging,
}

/// One line of indicator values aligned to the series date index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorLine {
    /// Which line this is.
    pub role: LineRole,
    /// Display label.
    pub label: String,
    /// One value per date; `None` where history is insufficient.
    pub values: Vec<Option<f64>>,
}

impl IndicatorLine {
    /// Returns the number of defined values.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().flatten().count()
    }
}

/// Output of one indicator over an OHLCV series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    kind: IndicatorKind,
    dates: Vec<NaiveDate>,
    lines: Vec<IndicatorLine>,
}

impl IndicatorSeries {
    /// Assembles an indicator series.
    ///
    /// Every line must have exactly one value per date.
    pub(crate) fn new(kind: IndicatorKind, dates: Vec<NaiveDate>, lines: Vec<IndicatorLine>) -> Self {
        debug_assert!(lines.iter().all(|l| l.values.len() == dates.len()));
        Self { kind, dates, lines }
    }

    /// Returns the indicator that produced this series.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Returns the date index (identical to the source series' index).
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns all lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[IndicatorLine] {
        &self.lines
    }

    /// Returns the line with the given role, if present.
    #[must_use]
    pub fn line(&self, role: LineRole) -> Option<&IndicatorLine> {
        self.lines.iter().find(|l| l.role == role)
    }

    /// Iterates the defined `(date, value)` points of a line.
    pub fn points(&self, role: LineRole) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.line(role)
            .into_iter()
            .flat_map(move |line| self.dates.iter().zip(&line.values))
            .filter_map(|(date, value)| value.map(|v| (*date, v)))
    }
}
