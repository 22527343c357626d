use std::ops::Range;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// One OHLC record for a fixed time interval.
///
/// The `low <= open/close <= high` ordering is not enforced: loaders own input
/// validation and malformed records are drawn as they are.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Candle {
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

impl Candle {
    #[must_use]
    pub const fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            high,
            low,
            open,
            close,
        }
    }

    /// Converts decimal prices from a loader into a candle.
    pub fn from_decimal(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        ))
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    /// Loaders mark empty interval slots with a zero open.
    #[must_use]
    pub fn is_empty_slot(self) -> bool {
        self.open == 0.0
    }
}

/// Immutable, chronologically ordered candle sequence.
///
/// Index 0 is the earliest candle. The store is never mutated after
/// construction, so shared references can be read from any thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandleStore {
    candles: Box<[Candle]>,
}

impl CandleStore {
    #[must_use]
    pub fn new(candles: Vec<Candle>) -> Self {
        Self {
            candles: candles.into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Candle> {
        self.candles.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Candle> {
        self.candles.first().copied()
    }

    /// Candles in `range`, truncated to the stored length.
    #[must_use]
    pub fn window(&self, range: Range<usize>) -> &[Candle] {
        let end = range.end.min(self.candles.len());
        let start = range.start.min(end);
        &self.candles[start..end]
    }
}

impl FromIterator<Candle> for CandleStore {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Candle>> for CandleStore {
    fn from(candles: Vec<Candle>) -> Self {
        Self::new(candles)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn window_truncates_to_stored_length() {
        let store: CandleStore = (1..=4)
            .map(|i| {
                let open = f64::from(i);
                Candle::new(open, open + 0.5, open - 0.5, open + 0.25)
            })
            .collect();

        assert_eq!(store.window(2..10).len(), 2);
        assert!(store.window(7..9).is_empty());
        assert_eq!(store.window(0..1)[0].open, 1.0);
    }

    #[test]
    fn decimal_prices_convert_to_candle() {
        let candle = Candle::from_decimal(
            Decimal::new(11_050, 4),
            Decimal::new(11_120, 4),
            Decimal::new(10_990, 4),
            Decimal::new(11_010, 4),
        )
        .expect("representable prices");

        assert_abs_diff_eq!(candle.open, 1.105, epsilon = 1e-12);
        assert_abs_diff_eq!(candle.high, 1.112, epsilon = 1e-12);
        assert_abs_diff_eq!(candle.low, 1.099, epsilon = 1e-12);
        assert_abs_diff_eq!(candle.close, 1.101, epsilon = 1e-12);
        assert!(!candle.is_bullish());
    }

    #[test]
    fn zero_open_marks_empty_slot() {
        assert!(Candle::default().is_empty_slot());
        assert!(!Candle::new(1.0, 1.0, 1.0, 1.0).is_empty_slot());
    }
}
