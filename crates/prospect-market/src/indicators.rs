//! Technical indicator snapshot
//!
//! Computes the indicator set the report consumes (SMA, EMA, RSI, MACD,
//! Bollinger Bands, ATR) by streaming daily bars through the `ta`
//! indicators. MACD is built as the 12/26 EMA difference.

use crate::error::{MarketError, Result};
use crate::yahoo::Quote;
use serde::{Deserialize, Serialize};
use ta::{
    Next,
    indicators::{
        AverageTrueRange, BollingerBands, ExponentialMovingAverage, RelativeStrengthIndex,
        SimpleMovingAverage,
    },
};

/// Bars needed before the slow EMA is meaningful
const MIN_DATA_POINTS: usize = 26;

/// Technical indicator snapshot for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub symbol: String,
    pub data_points: usize,
    pub last_close: f64,
    pub sma_20: f64,
    pub ema_20: f64,
    pub rsi_14: f64,
    /// 12/26 EMA difference
    pub macd: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub atr_14: f64,
    /// RSI reading ("Overbought...", "Oversold...", "Neutral")
    pub rsi_signal: String,
    /// MACD sign ("Bullish" / "Bearish")
    pub macd_signal: String,
    /// Close relative to SMA-20 ("above" / "below")
    pub price_vs_sma: String,
}

impl TechnicalSnapshot {
    /// Compute a snapshot from daily bars, oldest first
    pub fn compute(symbol: &str, quotes: &[Quote]) -> Result<Self> {
        if quotes.len() < MIN_DATA_POINTS {
            return Err(MarketError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!(
                    "need at least {MIN_DATA_POINTS} bars, got {}",
                    quotes.len()
                ),
            });
        }

        let mut sma = SimpleMovingAverage::new(20).map_err(indicator_err)?;
        let mut ema = ExponentialMovingAverage::new(20).map_err(indicator_err)?;
        let mut rsi = RelativeStrengthIndex::new(14).map_err(indicator_err)?;
        let mut ema12 = ExponentialMovingAverage::new(12).map_err(indicator_err)?;
        let mut ema26 = ExponentialMovingAverage::new(26).map_err(indicator_err)?;
        let mut bb = BollingerBands::new(20, 2.0).map_err(indicator_err)?;
        let mut atr = AverageTrueRange::new(14).map_err(indicator_err)?;

        let mut last_close = 0.0;
        let mut sma_20 = 0.0;
        let mut ema_20 = 0.0;
        let mut rsi_14 = 0.0;
        let mut macd = 0.0;
        let mut bollinger_upper = 0.0;
        let mut bollinger_lower = 0.0;
        let mut atr_14 = 0.0;

        for quote in quotes {
            last_close = quote.close;
            sma_20 = sma.next(quote.close);
            ema_20 = ema.next(quote.close);
            rsi_14 = rsi.next(quote.close);
            macd = ema12.next(quote.close) - ema26.next(quote.close);

            let bands = bb.next(quote.close);
            bollinger_upper = bands.upper;
            bollinger_lower = bands.lower;

            let bar = ta::DataItem::builder()
                .open(quote.open)
                .high(quote.high)
                .low(quote.low)
                .close(quote.close)
                .volume(quote.volume as f64)
                .build()
                .map_err(indicator_err)?;
            atr_14 = atr.next(&bar);
        }

        Ok(Self {
            symbol: symbol.to_string(),
            data_points: quotes.len(),
            last_close,
            sma_20,
            ema_20,
            rsi_14,
            macd,
            bollinger_upper,
            bollinger_lower,
            atr_14,
            rsi_signal: interpret_rsi(rsi_14).to_string(),
            macd_signal: if macd > 0.0 { "Bullish" } else { "Bearish" }.to_string(),
            price_vs_sma: if last_close > sma_20 { "above" } else { "below" }.to_string(),
        })
    }
}

fn indicator_err(err: impl std::fmt::Display) -> MarketError {
    MarketError::Indicator(err.to_string())
}

/// Interpret RSI value
fn interpret_rsi(rsi: f64) -> &'static str {
    if rsi > 70.0 {
        "Overbought - potential sell signal"
    } else if rsi < 30.0 {
        "Oversold - potential buy signal"
    } else {
        "Neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bars(closes: &[f64]) -> Vec<Quote> {
        closes
            .iter()
            .map(|&close| Quote {
                symbol: "TEST".to_string(),
                timestamp: Utc::now(),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000,
                adjclose: close,
            })
            .collect()
    }

    #[test]
    fn test_interpret_rsi() {
        assert_eq!(interpret_rsi(75.0), "Overbought - potential sell signal");
        assert_eq!(interpret_rsi(25.0), "Oversold - potential buy signal");
        assert_eq!(interpret_rsi(50.0), "Neutral");
    }

    #[test]
    fn test_insufficient_data_rejected() {
        let err = TechnicalSnapshot::compute("TEST", &bars(&[100.0; 10])).unwrap_err();
        assert!(matches!(err, MarketError::DataUnavailable { .. }));
    }

    #[test]
    fn test_flat_series_snapshot() {
        let snapshot = TechnicalSnapshot::compute("TEST", &bars(&[100.0; 40])).unwrap();
        assert_eq!(snapshot.data_points, 40);
        assert!((snapshot.last_close - 100.0).abs() < 1e-9);
        assert!((snapshot.sma_20 - 100.0).abs() < 1e-9);
        assert!((snapshot.ema_20 - 100.0).abs() < 1e-6);
        // Flat prices: MACD converges to zero.
        assert!(snapshot.macd.abs() < 1e-6);
    }

    #[test]
    fn test_rising_series_is_bullish() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i)).collect();
        let snapshot = TechnicalSnapshot::compute("TEST", &bars(&closes)).unwrap();
        assert_eq!(snapshot.macd_signal, "Bullish");
        assert_eq!(snapshot.price_vs_sma, "above");
        assert!(snapshot.rsi_14 > 50.0);
    }
}
