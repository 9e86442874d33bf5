//! Benchmark fixtures for stockdash.

use chrono::{Days, NaiveDate};
use stockdash_lib::{Bar, OhlcvSeries, Ticker};

/// Bar counts used by the benchmarks: roughly one, five and twenty years of
/// trading days.
pub const SERIES_LENGTHS: [usize; 3] = [252, 1_260, 5_040];

/// Builds a deterministic daily series of `len` bars for `symbol`.
///
/// Prices follow a drifting oscillation with alternating up and down days,
/// so every indicator sees both gains and losses.
///
/// # Panics
///
/// Panics if `symbol` is blank.
pub fn synthetic_series(symbol: &str, len: usize) -> OhlcvSeries {
    let ticker = Ticker::new(symbol).expect("non-blank symbol");
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).expect("valid date");
    let bars = (0..len)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + 15.0 * (t / 40.0).sin() + 4.0 * (t / 7.0).cos() + t * 0.01;
            let open = close + if i % 2 == 0 { -0.6 } else { 0.6 };
            Bar::new(
                start + Days::new(i as u64),
                open,
                open.max(close) + 1.1,
                open.min(close) - 1.1,
                close,
                2.0e6 + 5.0e5 * (t / 13.0).sin(),
            )
        })
        .collect();
    OhlcvSeries::new(ticker, bars).expect("dates are strictly increasing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_series_is_valid() {
        let series = synthetic_series("bench", 500);
        assert_eq!(series.len(), 500);
        assert_eq!(series.ticker().as_str(), "BENCH");
        assert!(series.bars().iter().all(|b| b.low <= b.open.min(b.close)));
        assert!(series.bars().iter().all(|b| b.high >= b.open.max(b.close)));
    }
}
