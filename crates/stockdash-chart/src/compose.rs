//! Builds a [`Figure`] from a price series and its indicators.

use stockdash_indicators::{IndicatorKind, IndicatorLine, IndicatorSeries, LineRole};
use stockdash_types::OhlcvSeries;

use crate::figure::{Figure, Panel, PanelKind, Trace};

const RISING: &str = "#26a69a";
const FALLING: &str = "#ef5350";
const BAND_FILL: &str = "rgba(70, 130, 180, 0.12)";
const CLOUD_BULLISH: &str = "rgba(46, 160, 67, 0.25)";
const CLOUD_BEARISH: &str = "rgba(218, 54, 51, 0.25)";

/// RSI levels conventionally read as oversold and overbought.
pub const RSI_REFERENCE_LEVELS: [f64; 2] = [30.0, 70.0];

/// Layout and styling of composed figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Figure width in pixels.
    pub width: u32,
    /// Height of the price panel.
    pub price_height: u32,
    /// Height of the volume panel.
    pub volume_height: u32,
    /// Height of each oscillator panel.
    pub oscillator_height: u32,
    /// Whether to add the volume panel.
    pub show_volume: bool,
    /// Background around the plot areas.
    pub paper_background: String,
    /// Background of the plot areas.
    pub plot_background: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1100,
            price_height: 460,
            volume_height: 120,
            oscillator_height: 150,
            show_volume: true,
            paper_background: "LightSteelBlue".to_string(),
            plot_background: "white".to_string(),
        }
    }
}

/// Composes the figure for one ticker.
///
/// Overlay indicators (moving averages, Bollinger Bands, Ichimoku) are drawn
/// on the price panel; MACD and RSI each get an oscillator panel below the
/// volume panel, in the order they appear in `indicators`.
#[must_use]
pub fn compose(
    series: &OhlcvSeries,
    indicators: &[IndicatorSeries],
    options: &ChartOptions,
) -> Figure {
    let mut price = Panel::new(
        PanelKind::Price,
        format!("{} historical price chart", series.ticker()),
        options.price_height,
    )
    .with_y_label("price ($/share)");
    price.push(candlesticks(series));

    let mut oscillators = Vec::new();
    for indicator in indicators {
        match indicator.kind() {
            IndicatorKind::Ma20 | IndicatorKind::Ma50 | IndicatorKind::Ma200 => {
                price.traces.extend(lines(indicator));
            }
            IndicatorKind::BollingerBands => {
                if let (Some(upper), Some(lower)) =
                    (indicator.line(LineRole::Upper), indicator.line(LineRole::Lower))
                {
                    price.push(Trace::Fill {
                        name: "Bollinger Bands".to_string(),
                        upper: upper.values.clone(),
                        lower: lower.values.clone(),
                        color: BAND_FILL.to_string(),
                    });
                }
                price.traces.extend(lines(indicator));
            }
            IndicatorKind::Ichimoku => {
                if let (Some(a), Some(b)) =
                    (indicator.line(LineRole::SpanA), indicator.line(LineRole::SpanB))
                {
                    price.traces.extend(cloud(&a.values, &b.values));
                }
                price.traces.extend(lines(indicator));
            }
            IndicatorKind::Macd => {
                let mut panel = Panel::new(PanelKind::Oscillator, "MACD", options.oscillator_height)
                    .with_reference_levels([0.0]);
                for line in indicator.lines() {
                    panel.push(if line.role == LineRole::Histogram {
                        histogram(line)
                    } else {
                        line_trace(line)
                    });
                }
                oscillators.push(panel);
            }
            IndicatorKind::Rsi => {
                let mut panel = Panel::new(PanelKind::Oscillator, "RSI", options.oscillator_height)
                    .with_y_range(0.0, 100.0)
                    .with_reference_levels(RSI_REFERENCE_LEVELS);
                panel.traces.extend(lines(indicator));
                oscillators.push(panel);
            }
        }
    }

    let mut panels = vec![price];
    if options.show_volume {
        panels.push(volume(series, options.volume_height));
    }
    panels.extend(oscillators);

    Figure {
        title: format!("{} historical price chart", series.ticker()),
        width: options.width,
        paper_background: options.paper_background.clone(),
        plot_background: options.plot_background.clone(),
        dates: series.dates(),
        panels,
    }
}

fn candlesticks(series: &OhlcvSeries) -> Trace {
    let bars = series.bars();
    Trace::Candlestick {
        name: series.ticker().to_string(),
        open: bars.iter().map(|b| b.open).collect(),
        high: bars.iter().map(|b| b.high).collect(),
        low: bars.iter().map(|b| b.low).collect(),
        close: bars.iter().map(|b| b.close).collect(),
        increasing: RISING.to_string(),
        decreasing: FALLING.to_string(),
    }
}

fn volume(series: &OhlcvSeries, height: u32) -> Panel {
    let mut panel = Panel::new(PanelKind::Volume, "Volume", height).with_y_label("shares");
    panel.push(Trace::Bars {
        name: "Volume".to_string(),
        values: series.bars().iter().map(|b| Some(b.volume)).collect(),
        rising: series.bars().iter().map(|b| b.is_bullish()).collect(),
        up_color: RISING.to_string(),
        down_color: FALLING.to_string(),
    });
    panel
}

fn lines(indicator: &IndicatorSeries) -> impl Iterator<Item = Trace> + '_ {
    indicator.lines().iter().map(line_trace)
}

fn line_trace(line: &IndicatorLine) -> Trace {
    let (color, width) = line_style(line);
    Trace::Line {
        name: line.label.clone(),
        values: line.values.clone(),
        color: color.to_string(),
        width,
    }
}

fn line_style(line: &IndicatorLine) -> (&'static str, f64) {
    match (line.role, line.label.as_str()) {
        (LineRole::Value, "MA20") => ("#ff9800", 1.5),
        (LineRole::Value, "MA50") => ("#1e88e5", 1.5),
        (LineRole::Value, "MA200") => ("#8e24aa", 1.5),
        (LineRole::Value, _) => ("#5e35b1", 1.5),
        (LineRole::Macd, _) => ("#1e88e5", 1.5),
        (LineRole::Signal, _) => ("#ff9800", 1.5),
        (LineRole::Histogram, _) => ("#9e9e9e", 1.0),
        (LineRole::Upper | LineRole::Lower, _) => ("steelblue", 1.0),
        (LineRole::Middle, _) => ("steelblue", 0.75),
        (LineRole::Conversion, _) => ("#0496ff", 1.0),
        (LineRole::Base, _) => ("#991515", 1.0),
        (LineRole::SpanA, _) => ("#2e7d32", 0.75),
        (LineRole::SpanB, _) => ("#c62828", 0.75),
        (LineRole::Lagging, _) => ("#459915", 1.0),
    }
}

fn histogram(line: &IndicatorLine) -> Trace {
    Trace::Bars {
        name: line.label.clone(),
        values: line.values.clone(),
        rising: line.values.iter().map(|v| v.is_none_or(|v| v >= 0.0)).collect(),
        up_color: RISING.to_string(),
        down_color: FALLING.to_string(),
    }
}

/// Splits the area between span A and span B into a bullish fill (A above
/// B) and a bearish fill (A below B).
///
/// A date belongs to a fill when it or its predecessor is on that side, so
/// adjacent runs share their crossover date and the cloud has no gaps.
fn cloud(span_a: &[Option<f64>], span_b: &[Option<f64>]) -> [Trace; 2] {
    let sides: Vec<Option<bool>> = span_a
        .iter()
        .zip(span_b)
        .map(|(a, b)| Some(a.as_ref()? >= b.as_ref()?))
        .collect();

    let mask = |bullish: bool| -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        sides
            .iter()
            .enumerate()
            .map(|(i, side)| {
                let here = *side == Some(bullish);
                let before = i > 0 && sides[i - 1] == Some(bullish) && side.is_some();
                if here || before {
                    (span_a[i], span_b[i])
                } else {
                    (None, None)
                }
            })
            .unzip()
    };

    let (bull_a, bull_b) = mask(true);
    let (bear_a, bear_b) = mask(false);
    [
        Trace::Fill {
            name: "Ichimoku cloud (bullish)".to_string(),
            upper: bull_a,
            lower: bull_b,
            color: CLOUD_BULLISH.to_string(),
        },
        Trace::Fill {
            name: "Ichimoku cloud (bearish)".to_string(),
            upper: bear_b,
            lower: bear_a,
            color: CLOUD_BEARISH.to_string(),
        },
    ]
}
