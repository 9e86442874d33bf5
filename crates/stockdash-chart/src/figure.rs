//! The figure model: panels of traces over a shared date axis.

use chrono::NaiveDate;
use serde::Serialize;

/// Which kind of data a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Candlesticks with price-scale overlays.
    Price,
    /// Daily traded volume.
    Volume,
    /// An indicator with its own value scale (MACD, RSI).
    Oscillator,
}

/// A single drawable element of a panel.
///
/// Every per-date vector has one entry per date of the owning [`Figure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    /// OHLC candles, coloured by direction.
    Candlestick {
        /// Legend name.
        name: String,
        /// Opening prices.
        open: Vec<f64>,
        /// Daily highs.
        high: Vec<f64>,
        /// Daily lows.
        low: Vec<f64>,
        /// Closing prices.
        close: Vec<f64>,
        /// Colour of candles closing at or above their open.
        increasing: String,
        /// Colour of candles closing below their open.
        decreasing: String,
    },
    /// A polyline that breaks wherever a value is absent.
    Line {
        /// Legend name.
        name: String,
        /// One value per date.
        values: Vec<Option<f64>>,
        /// Stroke colour.
        color: String,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A shaded area between two lines, drawn over each run where both are
    /// defined.
    Fill {
        /// Legend name.
        name: String,
        /// Upper edge.
        upper: Vec<Option<f64>>,
        /// Lower edge.
        lower: Vec<Option<f64>>,
        /// Fill colour, usually translucent.
        color: String,
    },
    /// Vertical bars from zero.
    Bars {
        /// Legend name.
        name: String,
        /// One value per date.
        values: Vec<Option<f64>>,
        /// Whether each bar uses the rising colour.
        rising: Vec<bool>,
        /// Colour of rising bars.
        up_color: String,
        /// Colour of falling bars.
        down_color: String,
    },
}

impl Trace {
    /// Returns the legend name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Candlestick { name, .. }
            | Self::Line { name, .. }
            | Self::Fill { name, .. }
            | Self::Bars { name, .. } => name,
        }
    }

    /// Returns the smallest and largest value drawn by this trace.
    ///
    /// Bars always include zero, their baseline.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        match self {
            Self::Candlestick { high, low, .. } => {
                extent(low.iter().chain(high).copied())
            }
            Self::Line { values, .. } => extent(values.iter().flatten().copied()),
            Self::Fill { upper, lower, .. } => {
                extent(upper.iter().chain(lower).flatten().copied())
            }
            Self::Bars { values, .. } => {
                extent(values.iter().flatten().copied().chain(std::iter::once(0.0)))
            }
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// One horizontal band of a figure with its own value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// What the panel shows.
    pub kind: PanelKind,
    /// Panel heading.
    pub title: String,
    /// Value-axis label.
    pub y_label: Option<String>,
    /// Height in pixels.
    pub height: u32,
    /// Fixed value range; derived from the traces when `None`.
    pub y_range: Option<(f64, f64)>,
    /// Horizontal reference levels (e.g. RSI 30/70).
    pub reference_levels: Vec<f64>,
    /// Traces in drawing order.
    pub traces: Vec<Trace>,
}

impl Panel {
    /// Creates an empty panel.
    #[must_use]
    pub fn new(kind: PanelKind, title: impl Into<String>, height: u32) -> Self {
        Self {
            kind,
            title: title.into(),
            y_label: None,
            height,
            y_range: None,
            reference_levels: Vec::new(),
            traces: Vec::new(),
        }
    }

    /// Sets the value-axis label.
    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Fixes the value range.
    #[must_use]
    pub const fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Adds horizontal reference levels.
    #[must_use]
    pub fn with_reference_levels(mut self, levels: impl IntoIterator<Item = f64>) -> Self {
        self.reference_levels.extend(levels);
        self
    }

    /// Appends a trace.
    pub fn push(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Returns the value range to plot, padded by 5% on each side.
    ///
    /// A fixed range is returned unchanged. Panels without any finite value
    /// fall back to `(0, 1)`; flat data is widened so the range is never
    /// empty.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        if let Some(range) = self.y_range {
            return range;
        }
        let Some((lo, hi)) = self
            .traces
            .iter()
            .filter_map(Trace::extent)
            .chain(self.reference_levels.iter().map(|&l| (l, l)))
            .reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))
        else {
            return (0.0, 1.0);
        };
        let pad = if hi > lo { (hi - lo) * 0.05 } else { lo.abs().max(1.0) * 0.05 };
        (lo - pad, hi + pad)
    }
}

/// A chart for one ticker: stacked panels sharing a date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Figure heading.
    pub title: String,
    /// Width in pixels.
    pub width: u32,
    /// Background colour around the plot areas.
    pub paper_background: String,
    /// Background colour of the plot areas.
    pub plot_background: String,
    /// Shared date axis.
    pub dates: Vec<NaiveDate>,
    /// Panels from top to bottom.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Returns the total height of all panels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.panels.iter().map(|p| p.height).sum()
    }

    /// Returns the first panel of the given kind.
    #[must_use]
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}
