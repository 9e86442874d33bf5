//! Simple Moving Average (SMA).

use std::collections::VecDeque;

use crate::indicator::{Indicator, IndicatorError};

/// Computes the arithmetic mean over a rolling window.
///
/// The mean is updated by differences rather than from a running sum, so a
/// window of identical values reproduces that value exactly.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    mean: f64,
    window: VecDeque<f64>,
}

impl Sma {
    /// Creates a new SMA with the provided period.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] for a zero period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = IndicatorError::check_period("SMA", period)?;
        Ok(Self {
            period,
            mean: 0.0,
            window: VecDeque::with_capacity(period + 1),
        })
    }

    /// Returns the configured lookback period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns the values currently inside the window.
    pub(crate) const fn window(&self) -> &VecDeque<f64> {
        &self.window
    }
}

impl Indicator for Sma {
    type Input = f64;
    type Output = f64;

    fn next(&mut self, input: f64) -> Option<f64> {
        self.window.push_back(input);

        if self.window.len() > self.period {
            let outgoing = self.window.pop_front().unwrap_or(input);
            self.mean += (input - outgoing) / self.period as f64;
        } else {
            self.mean += (input - self.mean) / self.window.len() as f64;
        }

        (self.window.len() == self.period).then_some(self.mean)
    }

    fn reset(&mut self) {
        self.mean = 0.0;
        self.window.clear();
    }
}
