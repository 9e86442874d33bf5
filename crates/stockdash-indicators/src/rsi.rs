//! Relative Strength Index (RSI).

use crate::indicator::{Indicator, IndicatorError};

/// Wilder's RSI oscillator, bounded to `[0, 100]`.
///
/// The first average gain/loss is the simple mean of the first `period`
/// price changes; later values use Wilder smoothing.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    prev_value: Option<f64>,
    averages: Option<(f64, f64)>,
    warmup_count: usize,
    gain_sum: f64,
    loss_sum: f64,
}

impl Rsi {
    /// Creates a new RSI with the provided period.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] for a zero period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = IndicatorError::check_period("RSI", period)?;
        Ok(Self {
            period,
            prev_value: None,
            averages: None,
            warmup_count: 0,
            gain_sum: 0.0,
            loss_sum: 0.0,
        })
    }

    fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss <= 0.0 {
            100.0
        } else if avg_gain <= 0.0 {
            0.0
        } else {
            let rs = avg_gain / avg_loss;
            (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
        }
    }
}

impl Indicator for Rsi {
    type Input = f64;
    type Output = f64;

    fn next(&mut self, input: f64) -> Option<f64> {
        let prev = self.prev_value.replace(input)?;

        let change = input - prev;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        let (avg_gain, avg_loss) = match self.averages {
            None => {
                self.warmup_count += 1;
                self.gain_sum += gain;
                self.loss_sum += loss;
                if self.warmup_count < self.period {
                    return None;
                }
                let n = self.period as f64;
                (self.gain_sum / n, self.loss_sum / n)
            }
            Some((avg_gain, avg_loss)) => {
                let n = self.period as f64;
                (
                    (avg_gain * (n - 1.0) + gain) / n,
                    (avg_loss * (n - 1.0) + loss) / n,
                )
            }
        };

        self.averages = Some((avg_gain, avg_loss));
        Some(Self::compute_rsi(avg_gain, avg_loss))
    }

    fn reset(&mut self) {
        self.prev_value = None;
        self.averages = None;
        self.warmup_count = 0;
        self.gain_sum = 0.0;
        self.loss_sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Rsi;
    use crate::Indicator;

    #[test]
    fn waits_for_initial_window() {
        let mut rsi = Rsi::new(3).unwrap();
        assert_eq!(rsi.next(1.0), None);
        assert_eq!(rsi.next(2.0), None);
        assert_eq!(rsi.next(3.0), None);
        assert!(rsi.next(2.0).is_some());
    }

    #[test]
    fn computes_expected_values() {
        let mut rsi = Rsi::new(3).unwrap();
        let series = [1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0];
        let outputs: Vec<f64> = series.iter().filter_map(|&v| rsi.next(v)).collect();
        let expected = [
            66.666_666_666_666_67,
            44.444_444_444_444_44,
            62.962_962_962_962_96,
            75.308_641_975_308_64,
            83.539_094_650_205_76,
        ];

        assert_eq!(outputs.len(), expected.len());
        for (lhs, rhs) in outputs.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-9);
        }
    }

    #[test]
    fn flat_input_reads_as_overbought() {
        let mut rsi = Rsi::new(3).unwrap();
        for _ in 0..4 {
            rsi.next(1.0);
        }
        assert_eq!(rsi.next(1.0), Some(100.0));
    }

    #[test]
    fn falling_input_reads_zero() {
        let mut rsi = Rsi::new(3).unwrap();
        let last = [10.0, 9.0, 8.0, 7.0, 6.0]
            .into_iter()
            .filter_map(|v| rsi.next(v))
            .last();
        assert_eq!(last, Some(0.0));
    }

    #[test]
    fn reset_clears_buffers() {
        let mut rsi = Rsi::new(2).unwrap();
        rsi.next(1.0);
        rsi.next(2.0);
        assert!(rsi.next(3.0).is_some());
        rsi.reset();
        assert_eq!(rsi.next(3.0), None);
    }
}
