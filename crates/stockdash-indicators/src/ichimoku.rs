//! Ichimoku Cloud component lines.

use std::collections::VecDeque;

use stockdash_types::Bar;

use crate::indicator::{Indicator, IndicatorError};

/// Unshifted Ichimoku values for one bar.
///
/// Span A and span B are reported at the bar they are computed from; the
/// forward projection is applied at series level by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IchimokuOutput {
    /// Tenkan-sen: midpoint of the conversion window.
    pub conversion_line: Option<f64>,
    /// Kijun-sen: midpoint of the base window.
    pub base_line: Option<f64>,
    /// Senkou span A before projection: mean of conversion and base lines.
    pub span_a: Option<f64>,
    /// Senkou span B before projection: midpoint of the longest window.
    pub span_b: Option<f64>,
}

/// Rolling high/low midpoints over three lookback windows.
#[derive(Debug, Clone)]
pub struct Ichimoku {
    conversion: Midpoint,
    base: Midpoint,
    span_b: Midpoint,
}

impl Ichimoku {
    /// Builds a new Ichimoku indicator with custom periods.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] if any period is zero.
    pub fn new(
        conversion_period: usize,
        base_period: usize,
        span_b_period: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            conversion: Midpoint::new(IndicatorError::check_period("Ichimoku", conversion_period)?),
            base: Midpoint::new(IndicatorError::check_period("Ichimoku", base_period)?),
            span_b: Midpoint::new(IndicatorError::check_period("Ichimoku", span_b_period)?),
        })
    }

    /// Creates the conventional 9/26/52 Ichimoku.
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible to match [`Ichimoku::new`].
    pub fn standard() -> Result<Self, IndicatorError> {
        Self::new(9, 26, 52)
    }
}

impl Indicator for Ichimoku {
    type Input = Bar;
    type Output = IchimokuOutput;

    fn next(&mut self, input: Bar) -> Option<IchimokuOutput> {
        let conversion_line = self.conversion.push(input.high, input.low);
        let base_line = self.base.push(input.high, input.low);
        let span_b = self.span_b.push(input.high, input.low);
        let span_a = conversion_line.zip(base_line).map(|(c, b)| (c + b) / 2.0);

        Some(IchimokuOutput {
            conversion_line,
            base_line,
            span_a,
            span_b,
        })
    }

    fn reset(&mut self) {
        self.conversion.clear();
        self.base.clear();
        self.span_b.clear();
    }
}

#[derive(Debug, Clone)]
struct Midpoint {
    period: usize,
    highs: VecDeque<f64>,
    lows: VecDeque<f64>,
}

impl Midpoint {
    fn new(period: usize) -> Self {
        Self {
            period,
            highs: VecDeque::with_capacity(period + 1),
            lows: VecDeque::with_capacity(period + 1),
        }
    }

    fn push(&mut self, high: f64, low: f64) -> Option<f64> {
        push_queue(&mut self.highs, self.period, high);
        push_queue(&mut self.lows, self.period, low);
        if self.highs.len() < self.period {
            return None;
        }
        let max_high = self.highs.iter().copied().reduce(f64::max)?;
        let min_low = self.lows.iter().copied().reduce(f64::min)?;
        Some((max_high + min_low) / 2.0)
    }

    fn clear(&mut self) {
        self.highs.clear();
        self.lows.clear();
    }
}

fn push_queue(queue: &mut VecDeque<f64>, period: usize, value: f64) {
    queue.push_back(value);
    if queue.len() > period {
        queue.pop_front();
    }
}
