//! Market data and technical indicators
//!
//! Downstream consumer of the sector signal pipeline: once candidates are
//! selected, this crate fetches their price history from Yahoo Finance and
//! computes a technical snapshot (SMA, EMA, RSI, MACD, Bollinger Bands,
//! ATR) for the report. A timed cache keeps repeated lookups within a
//! session from hammering the quote API.

pub mod cache;
pub mod error;
pub mod indicators;
pub mod yahoo;

pub use cache::QuoteCache;
pub use error::{MarketError, Result};
pub use indicators::TechnicalSnapshot;
pub use yahoo::{Quote, YahooClient};
