//! Mention aggregation into candidate stocks
//!
//! Folds the mention stream into one `CandidateStock` per ticker. The
//! relevance score blends a saturating frequency signal with the magnitude
//! of the average sentiment: frequent tickers rank high, but a few strongly
//! polarized mentions can outrank many lukewarm ones. Only tickers that
//! were actually extracted appear in the output.

use crate::config::SignalConfig;
use crate::model::{CandidateStock, Mention};
use std::collections::BTreeMap;

struct TickerAccumulator {
    mention_count: usize,
    sentiment_sum: f64,
}

/// Group mentions by ticker into candidate stocks
pub fn aggregate(mentions: &[Mention], config: &SignalConfig) -> BTreeMap<String, CandidateStock> {
    let mut accumulators: BTreeMap<String, TickerAccumulator> = BTreeMap::new();

    for mention in mentions {
        let entry = accumulators
            .entry(mention.ticker.clone())
            .or_insert(TickerAccumulator {
                mention_count: 0,
                sentiment_sum: 0.0,
            });
        entry.mention_count += 1;
        entry.sentiment_sum += mention.sentiment;
    }

    accumulators
        .into_iter()
        .map(|(ticker, acc)| {
            let average_sentiment = acc.sentiment_sum / acc.mention_count as f64;
            let relevance_score = relevance(acc.mention_count, average_sentiment, config);
            let rationale = rationale(&ticker, acc.mention_count, average_sentiment);

            let candidate = CandidateStock {
                ticker: ticker.clone(),
                mention_count: acc.mention_count,
                average_sentiment,
                relevance_score,
                rationale,
            };
            (ticker, candidate)
        })
        .collect()
}

/// Blended relevance in [0, 1]
///
/// Frequency saturates at `mention_reference` so a single viral thread
/// cannot dominate the ranking.
fn relevance(mention_count: usize, average_sentiment: f64, config: &SignalConfig) -> f64 {
    let frequency = (mention_count as f64 / config.mention_reference).min(1.0);
    frequency * config.frequency_weight + average_sentiment.abs() * config.sentiment_weight
}

/// Deterministic one-line rationale for a candidate
fn rationale(ticker: &str, mention_count: usize, average_sentiment: f64) -> String {
    let popularity = if mention_count >= 10 {
        "heavily discussed"
    } else if mention_count >= 3 {
        "trending"
    } else {
        "lightly mentioned"
    };

    format!(
        "{ticker} is {popularity} on Reddit with {} sentiment, \
         indicating retail investor interest.",
        sentiment_label(average_sentiment)
    )
}

/// Classify average sentiment into bullish/neutral/bearish at +-0.3
pub fn sentiment_label(average_sentiment: f64) -> &'static str {
    if average_sentiment > 0.3 {
        "bullish"
    } else if average_sentiment < -0.3 {
        "bearish"
    } else {
        "neutral"
    }
}
