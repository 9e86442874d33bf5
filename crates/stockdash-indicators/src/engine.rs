//! Series-level indicator computation.
//!
//! Each [`IndicatorKind`] maps to one pure function from an OHLCV series to
//! an [`IndicatorSeries`] sharing the series' date index.

use stockdash_types::OhlcvSeries;

use crate::{
    BollingerBands, Ichimoku, Indicator, IndicatorError, IndicatorKind, IndicatorLine,
    IndicatorSeries, LineRole, Macd, Rsi, Sma,
};

/// Ichimoku projection distance, in bars.
const ICHIMOKU_SHIFT: usize = 26;

pub(crate) fn compute(
    kind: IndicatorKind,
    series: &OhlcvSeries,
) -> Result<IndicatorSeries, IndicatorError> {
    let lines = match kind {
        IndicatorKind::Ma20 => moving_average(series, 20, kind)?,
        IndicatorKind::Ma50 => moving_average(series, 50, kind)?,
        IndicatorKind::Ma200 => moving_average(series, 200, kind)?,
        IndicatorKind::Macd => macd(series)?,
        IndicatorKind::Rsi => rsi(series)?,
        IndicatorKind::BollingerBands => bollinger(series)?,
        IndicatorKind::Ichimoku => ichimoku(series)?,
    };
    Ok(IndicatorSeries::new(kind, series.dates(), lines))
}

fn line(role: LineRole, label: &str, values: Vec<Option<f64>>) -> IndicatorLine {
    IndicatorLine {
        role,
        label: label.to_string(),
        values,
    }
}

fn moving_average(
    series: &OhlcvSeries,
    period: usize,
    kind: IndicatorKind,
) -> Result<Vec<IndicatorLine>, IndicatorError> {
    let mut sma = Sma::new(period)?;
    let values = series.closes().map(|close| sma.next(close)).collect();
    Ok(vec![line(LineRole::Value, kind.as_str(), values)])
}

fn macd(series: &OhlcvSeries) -> Result<Vec<IndicatorLine>, IndicatorError> {
    let mut macd = Macd::standard()?;
    let outputs: Vec<_> = series.closes().map(|close| macd.next(close)).collect();
    Ok(vec![
        line(LineRole::Macd, "MACD", outputs.iter().map(|o| o.map(|o| o.macd)).collect()),
        line(
            LineRole::Signal,
            "MACD Signal",
            outputs.iter().map(|o| o.and_then(|o| o.signal)).collect(),
        ),
        line(
            LineRole::Histogram,
            "MACD Histogram",
            outputs.iter().map(|o| o.and_then(|o| o.histogram)).collect(),
        ),
    ])
}

fn rsi(series: &OhlcvSeries) -> Result<Vec<IndicatorLine>, IndicatorError> {
    let mut rsi = Rsi::new(14)?;
    let values = series.closes().map(|close| rsi.next(close)).collect();
    Ok(vec![line(LineRole::Value, "RSI", values)])
}

fn bollinger(series: &OhlcvSeries) -> Result<Vec<IndicatorLine>, IndicatorError> {
    let mut bands = BollingerBands::new(20, 2.0)?;
    let outputs: Vec<_> = series.closes().map(|close| bands.next(close)).collect();
    Ok(vec![
        line(
            LineRole::Upper,
            "Bollinger Bands Upper",
            outputs.iter().map(|o| o.map(|o| o.upper)).collect(),
        ),
        line(
            LineRole::Lower,
            "Bollinger Bands Lower",
            outputs.iter().map(|o| o.map(|o| o.lower)).collect(),
        ),
        line(
            LineRole::Middle,
            "Bollinger Bands Middle",
            outputs.iter().map(|o| o.map(|o| o.middle)).collect(),
        ),
    ])
}

fn ichimoku(series: &OhlcvSeries) -> Result<Vec<IndicatorLine>, IndicatorError> {
    let mut ichimoku = Ichimoku::standard()?;
    let outputs: Vec<_> = series
        .bars()
        .iter()
        .map(|bar| ichimoku.next(*bar).unwrap_or_default())
        .collect();

    let span_a: Vec<_> = outputs.iter().map(|o| o.span_a).collect();
    let span_b: Vec<_> = outputs.iter().map(|o| o.span_b).collect();
    let closes: Vec<_> = series.closes().map(Some).collect();

    Ok(vec![
        line(
            LineRole::Conversion,
            "Tenkan-sen",
            outputs.iter().map(|o| o.conversion_line).collect(),
        ),
        line(LineRole::Base, "Kijun-sen", outputs.iter().map(|o| o.base_line).collect()),
        line(LineRole::SpanA, "Senkou Span A", shift_forward(&span_a, ICHIMOKU_SHIFT)),
        line(LineRole::SpanB, "Senkou Span B", shift_forward(&span_b, ICHIMOKU_SHIFT)),
        line(LineRole::Lagging, "Chikou Span", shift_backward(&closes, ICHIMOKU_SHIFT)),
    ])
}

/// Projects values `by` positions later in time.
///
/// The value at index `i` of the result is `values[i - by]`; the first `by`
/// entries are `None` and values pushed past the end are dropped.
#[must_use]
pub fn shift_forward(values: &[Option<f64>], by: usize) -> Vec<Option<f64>> {
    let lead = by.min(values.len());
    std::iter::repeat_n(None, lead)
        .chain(values[..values.len() - lead].iter().copied())
        .collect()
}

/// Projects values `by` positions earlier in time.
///
/// The value at index `i` of the result is `values[i + by]`; the last `by`
/// entries are `None`.
#[must_use]
pub fn shift_backward(values: &[Option<f64>], by: usize) -> Vec<Option<f64>> {
    let lead = by.min(values.len());
    values[lead..]
        .iter()
        .copied()
        .chain(std::iter::repeat_n(None, lead))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndicatorSet;
    use approx::assert_relative_eq;
    use chrono::{Days, NaiveDate};
    use stockdash_types::{Bar, Ticker};

    fn series_from(closes: &[f64]) -> OhlcvSeries {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Bar::new(start + Days::new(i as u64), c, c * 1.01, c * 0.99, c, 1_000.0)
            })
            .collect();
        OhlcvSeries::new(Ticker::new("TEST").unwrap(), bars).unwrap()
    }

    /// Deterministic zig-zag walk with both gains and losses.
    fn wavy(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| {
                let t = i as f64;
                100.0 + 10.0 * (t / 7.0).sin() + 3.0 * (t / 2.3).cos() + t * 0.05
            })
            .collect()
    }

    #[test]
    fn constant_series_moving_averages_are_exact() {
        let series = series_from(&vec![101.37; 260]);
        for kind in [IndicatorKind::Ma50, IndicatorKind::Ma200] {
            let out = kind.compute(&series).unwrap();
            let line = out.line(LineRole::Value).unwrap();
            assert!(line.defined_count() > 0);
            assert!(line.values.iter().flatten().all(|&v| v == 101.37));
        }
    }

    #[test]
    fn moving_average_leading_values_are_absent() {
        let series = series_from(&wavy(120));
        let out = IndicatorKind::Ma50.compute(&series).unwrap();
        let values = &out.line(LineRole::Value).unwrap().values;

        assert!(values[..49].iter().all(Option::is_none));
        assert!(values[49..].iter().all(Option::is_some));
        let expected: f64 = wavy(120)[..50].iter().sum::<f64>() / 50.0;
        assert_relative_eq!(values[49].unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn rsi_stays_in_bounds() {
        let mut closes = wavy(300);
        closes.extend((0..40).map(|i| 200.0 + f64::from(i) * 3.0));
        closes.extend((0..40).map(|i| 320.0 - f64::from(i) * 5.0));
        let out = IndicatorKind::Rsi.compute(&series_from(&closes)).unwrap();
        let line = out.line(LineRole::Value).unwrap();

        assert_eq!(line.values.iter().position(Option::is_some), Some(14));
        assert!(line.values.iter().flatten().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn bollinger_bands_are_ordered() {
        let out = IndicatorKind::BollingerBands
            .compute(&series_from(&wavy(250)))
            .unwrap();
        let upper = &out.line(LineRole::Upper).unwrap().values;
        let middle = &out.line(LineRole::Middle).unwrap().values;
        let lower = &out.line(LineRole::Lower).unwrap().values;

        let mut defined = 0;
        for ((u, m), l) in upper.iter().zip(middle).zip(lower) {
            if let (Some(u), Some(m), Some(l)) = (u, m, l) {
                assert!(l <= m && m <= u);
                defined += 1;
            }
        }
        assert_eq!(defined, 250 - 19);
    }

    #[test]
    fn macd_lines_warm_up_in_order() {
        let out = IndicatorKind::Macd.compute(&series_from(&wavy(100))).unwrap();
        let first = |role| out.line(role).unwrap().values.iter().position(Option::is_some);

        assert_eq!(first(LineRole::Macd), Some(25));
        assert_eq!(first(LineRole::Signal), Some(33));
        assert_eq!(first(LineRole::Histogram), Some(33));
    }

    #[test]
    fn ichimoku_projections_stay_inside_date_index() {
        let series = series_from(&wavy(150));
        let out = IndicatorKind::Ichimoku.compute(&series).unwrap();
        let first = |role| out.line(role).unwrap().values.iter().position(Option::is_some);
        let last = |role| out.line(role).unwrap().values.iter().rposition(Option::is_some);

        assert_eq!(out.lines().len(), 5);
        assert_eq!(first(LineRole::Conversion), Some(8));
        assert_eq!(first(LineRole::Base), Some(25));
        assert_eq!(first(LineRole::SpanA), Some(25 + 26));
        assert_eq!(first(LineRole::SpanB), Some(51 + 26));
        assert_eq!(last(LineRole::Lagging), Some(150 - 27));
        assert_eq!(
            out.line(LineRole::Lagging).unwrap().values[0],
            Some(series.bars()[26].close)
        );
    }

    #[test]
    fn every_indicator_shares_the_source_date_index() {
        let series = series_from(&wavy(90));
        for &kind in IndicatorKind::all() {
            let out = kind.compute(&series).unwrap();
            assert_eq!(out.dates(), series.dates().as_slice());
            assert!(out.lines().iter().all(|l| l.values.len() == series.len()));
            assert!(out.points(out.lines()[0].role).all(|(d, _)| series.dates().contains(&d)));
        }
    }

    #[test]
    fn short_series_yields_absent_values() {
        let series = series_from(&[10.0, 11.0, 12.0]);
        let out = IndicatorKind::Ma200.compute(&series).unwrap();
        assert_eq!(out.line(LineRole::Value).unwrap().defined_count(), 0);

        let ichimoku = IndicatorKind::Ichimoku.compute(&series).unwrap();
        assert!(ichimoku.lines().iter().all(|l| l.values.len() == 3));
    }

    #[test]
    fn computation_is_deterministic() {
        let series = series_from(&wavy(260));
        let set = IndicatorSet::from_iter(IndicatorKind::all().iter().copied());
        assert_eq!(set.compute_all(&series).unwrap(), set.compute_all(&series).unwrap());
    }

    #[test]
    fn shifts_pad_with_none() {
        let values = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(shift_forward(&values, 1), vec![None, Some(1.0), Some(2.0)]);
        assert_eq!(shift_backward(&values, 1), vec![Some(2.0), Some(3.0), None]);
        assert_eq!(shift_forward(&values, 5), vec![None, None, None]);
        assert_eq!(shift_backward(&values, 5), vec![None, None, None]);
    }
}
