//! Exponential Moving Average (EMA).

use crate::indicator::{Indicator, IndicatorError};

/// Exponentially-weighted moving average with `alpha = 2 / (period + 1)`.
///
/// The average is seeded with the first observation and reported once
/// `period` observations have been seen.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    alpha: f64,
    state: Option<f64>,
    seen: usize,
}

impl Ema {
    /// Creates a new EMA with the provided period.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] for a zero period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = IndicatorError::check_period("EMA", period)?;
        Ok(Self {
            period,
            alpha: 2.0 / (period as f64 + 1.0),
            state: None,
            seen: 0,
        })
    }

    /// Returns the current EMA value, if the warm-up has completed.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.state.filter(|_| self.seen >= self.period)
    }
}

impl Indicator for Ema {
    type Input = f64;
    type Output = f64;

    fn next(&mut self, input: f64) -> Option<f64> {
        let next = match self.state {
            Some(current) => current + self.alpha * (input - current),
            None => input,
        };
        self.state = Some(next);
        self.seen += 1;
        self.value()
    }

    fn reset(&mut self) {
        self.state = None;
        self.seen = 0;
    }
}
