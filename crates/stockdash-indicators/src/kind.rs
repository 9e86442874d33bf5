//! The enumerated set of supported indicators.

use serde::Serialize;
use std::str::FromStr;
use stockdash_types::OhlcvSeries;

use crate::{IndicatorError, IndicatorSeries, engine};

/// A supported indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorKind {
    /// 20-day simple moving average of close.
    #[serde(rename = "MA20")]
    Ma20,
    /// 50-day simple moving average of close.
    #[serde(rename = "MA50")]
    Ma50,
    /// 200-day simple moving average of close.
    #[serde(rename = "MA200")]
    Ma200,
    /// 12/26/9 MACD line, signal line and histogram.
    #[serde(rename = "MACD")]
    Macd,
    /// 14-day relative strength index.
    #[serde(rename = "RSI")]
    Rsi,
    /// 20-day Bollinger Bands at two standard deviations.
    BollingerBands,
    /// 9/26/52 Ichimoku Cloud.
    Ichimoku,
}

impl IndicatorKind {
    /// Returns the canonical indicator name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ma20 => "MA20",
            Self::Ma50 => "MA50",
            Self::Ma200 => "MA200",
            Self::Macd => "MACD",
            Self::Rsi => "RSI",
            Self::BollingerBands => "BollingerBands",
            Self::Ichimoku => "Ichimoku",
        }
    }

    /// Returns all supported indicators.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ma20,
            Self::Ma50,
            Self::Ma200,
            Self::Macd,
            Self::Rsi,
            Self::BollingerBands,
            Self::Ichimoku,
        ]
    }

    /// Returns true if the indicator is drawn on the price scale.
    #[must_use]
    pub const fn is_overlay(&self) -> bool {
        !matches!(self, Self::Macd | Self::Rsi)
    }

    /// Computes this indicator over `series`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the indicator's parameters are invalid.
    pub fn compute(self, series: &OhlcvSeries) -> Result<IndicatorSeries, IndicatorError> {
        engine::compute(self, series)
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| IndicatorParseError(name.to_string()))
    }
}

/// Error returned when parsing an unknown indicator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorParseError(String);

impl std::fmt::Display for IndicatorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown indicator '{}', expected one of: MA20, MA50, MA200, MACD, RSI, BollingerBands, Ichimoku",
            self.0
        )
    }
}

impl std::error::Error for IndicatorParseError {}

/// An ordered, duplicate-free selection of indicators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorSet {
    kinds: Vec<IndicatorKind>,
}

impl IndicatorSet {
    /// Parses a comma-separated list of indicator names.
    ///
    /// Matching is case-insensitive. Unknown names are skipped without error
    /// and repeated names keep their first position.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let mut set = Self::default();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.parse::<IndicatorKind>() {
                Ok(kind) => set.insert(kind),
                Err(_) => tracing::debug!(indicator = name, "ignoring unknown indicator"),
            }
        }
        set
    }

    /// Adds an indicator unless already present.
    pub fn insert(&mut self, kind: IndicatorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Returns true if the set contains `kind`.
    #[must_use]
    pub fn contains(&self, kind: IndicatorKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Returns true if no indicator is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterates the selected indicators in request order.
    pub fn iter(&self) -> impl Iterator<Item = IndicatorKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Computes every selected indicator over `series`, in request order.
    ///
    /// # Errors
    ///
    /// Returns the first indicator construction error.
    pub fn compute_all(&self, series: &OhlcvSeries) -> Result<Vec<IndicatorSeries>, IndicatorError> {
        self.iter().map(|kind| kind.compute(series)).collect()
    }
}

impl FromIterator<IndicatorKind> for IndicatorSet {
    fn from_iter<T: IntoIterator<Item = IndicatorKind>>(iter: T) -> Self {
        let mut set = Self::default();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl std::fmt::Display for IndicatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.kinds.iter().map(IndicatorKind::as_str).collect();
        f.write_str(&names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ma50".parse::<IndicatorKind>().unwrap(), IndicatorKind::Ma50);
        assert_eq!(
            " bollingerbands ".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::BollingerBands
        );
        assert_eq!("ICHIMOKU".parse::<IndicatorKind>().unwrap(), IndicatorKind::Ichimoku);
        assert!("MA5".parse::<IndicatorKind>().is_err());
    }

    #[test]
    fn test_set_ignores_unknown_names() {
        let set = IndicatorSet::parse("MA50,BogusIndicator");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![IndicatorKind::Ma50]);
    }

    #[test]
    fn test_set_deduplicates_and_keeps_order() {
        let set = IndicatorSet::parse("rsi, MA200,,RSI,macd");
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![IndicatorKind::Rsi, IndicatorKind::Ma200, IndicatorKind::Macd]
        );
        assert_eq!(set.to_string(), "RSI,MA200,MACD");
    }

    #[test]
    fn test_empty_list() {
        assert!(IndicatorSet::parse("").is_empty());
        assert!(IndicatorSet::parse("nope,also-nope").is_empty());
    }

    #[test]
    fn test_overlay_classification() {
        assert!(IndicatorKind::Ma50.is_overlay());
        assert!(IndicatorKind::Ichimoku.is_overlay());
        assert!(!IndicatorKind::Rsi.is_overlay());
        assert!(!IndicatorKind::Macd.is_overlay());
    }
}
