//! Moving Average Convergence Divergence.

use crate::ema::Ema;
use crate::indicator::{Indicator, IndicatorError};

/// MACD output for one observation.
///
/// The signal line needs its own warm-up, so it (and the histogram) may be
/// absent while the MACD line is already defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA.
    pub macd: f64,
    /// EMA of the MACD line.
    pub signal: Option<f64>,
    /// MACD minus signal.
    pub histogram: Option<f64>,
}

/// Moving Average Convergence Divergence indicator.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Creates a MACD indicator with custom fast/slow/signal periods.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] if any period is zero.
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            fast: Ema::new(IndicatorError::check_period("MACD", fast_period)?)?,
            slow: Ema::new(IndicatorError::check_period("MACD", slow_period)?)?,
            signal: Ema::new(IndicatorError::check_period("MACD", signal_period)?)?,
        })
    }

    /// Creates the conventional 12/26/9 MACD.
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible to match [`Macd::new`].
    pub fn standard() -> Result<Self, IndicatorError> {
        Self::new(12, 26, 9)
    }
}

impl Indicator for Macd {
    type Input = f64;
    type Output = MacdOutput;

    fn next(&mut self, input: f64) -> Option<MacdOutput> {
        let fast = self.fast.next(input);
        let slow = self.slow.next(input);
        let macd = fast? - slow?;
        let signal = self.signal.next(macd);
        Some(MacdOutput {
            macd,
            signal,
            histogram: signal.map(|s| macd - s),
        })
    }

    fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.signal.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_line_precedes_signal() {
        let mut macd = Macd::new(3, 6, 3).unwrap();
        let outputs: Vec<_> = (1..=12).map(|p| macd.next(f64::from(p))).collect();

        assert!(outputs[..5].iter().all(Option::is_none));
        let first = outputs[5].unwrap();
        assert!(first.signal.is_none());
        let later = outputs[7].unwrap();
        assert!(later.signal.is_some());
        assert_eq!(later.histogram, later.signal.map(|s| later.macd - s));
    }

    #[test]
    fn rising_prices_give_positive_macd() {
        let mut macd = Macd::standard().unwrap();
        let last = (1..=60).filter_map(|p| macd.next(f64::from(p))).last().unwrap();
        assert!(last.macd > 0.0);
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(Macd::new(12, 0, 9).is_err());
    }
}
