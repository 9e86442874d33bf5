//! The streaming indicator trait and its error type.

use thiserror::Error;

/// A streaming indicator fed one observation at a time.
///
/// `next` returns `None` while the indicator is still warming up.
pub trait Indicator {
    /// Observation type consumed by the indicator.
    type Input;
    /// Value produced once enough history has been seen.
    type Output;

    /// Feeds one observation and returns the current value, if defined.
    fn next(&mut self, input: Self::Input) -> Option<Self::Output>;

    /// Clears all accumulated state.
    fn reset(&mut self);
}

/// Errors raised when constructing an indicator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// A lookback period of zero was requested.
    #[error("{indicator}: period must be positive, got {period}")]
    InvalidPeriod {
        /// Indicator name.
        indicator: &'static str,
        /// Offending period.
        period: usize,
    },

    /// A numeric parameter is out of range.
    #[error("{indicator}: invalid {parameter} {value}")]
    InvalidParameter {
        /// Indicator name.
        indicator: &'static str,
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl IndicatorError {
    pub(crate) const fn invalid_period(indicator: &'static str, period: usize) -> Self {
        Self::InvalidPeriod { indicator, period }
    }

    /// Returns `Ok(period)` for positive periods.
    pub(crate) const fn check_period(
        indicator: &'static str,
        period: usize,
    ) -> Result<usize, Self> {
        if period == 0 {
            Err(Self::invalid_period(indicator, period))
        } else {
            Ok(period)
        }
    }
}
