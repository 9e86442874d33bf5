//! Bollinger Bands built on top of SMA and standard deviation.

use crate::indicator::{Indicator, IndicatorError};
use crate::sma::Sma;

/// Output value of the Bollinger Bands indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerOutput {
    /// Upper band (mean + k * std dev).
    pub upper: f64,
    /// Middle band (rolling mean).
    pub middle: f64,
    /// Lower band (mean - k * std dev).
    pub lower: f64,
}

/// Produces Bollinger Bands from a rolling window.
///
/// The deviation is the population standard deviation of the window.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    mean: Sma,
    std_multiplier: f64,
}

impl BollingerBands {
    /// Creates a new Bollinger Bands indicator.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero period or a negative/non-finite multiplier.
    pub fn new(period: usize, std_multiplier: f64) -> Result<Self, IndicatorError> {
        let period = IndicatorError::check_period("BollingerBands", period)?;
        if !std_multiplier.is_finite() || std_multiplier < 0.0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "BollingerBands",
                parameter: "std_multiplier",
                value: std_multiplier,
            });
        }
        Ok(Self {
            mean: Sma::new(period)?,
            std_multiplier,
        })
    }

    fn std_dev(&self, mean: f64) -> f64 {
        let window = self.mean.window();
        let variance =
            window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window.len() as f64;
        variance.max(0.0).sqrt()
    }
}

impl Indicator for BollingerBands {
    type Input = f64;
    type Output = BollingerOutput;

    fn next(&mut self, input: f64) -> Option<BollingerOutput> {
        let middle = self.mean.next(input)?;
        let offset = self.std_multiplier * self.std_dev(middle);
        Some(BollingerOutput {
            upper: middle + offset,
            middle,
            lower: middle - offset,
        })
    }

    fn reset(&mut self) {
        self.mean.reset();
    }
}
