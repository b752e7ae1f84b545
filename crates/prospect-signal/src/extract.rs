//! Ticker mention extraction
//!
//! Scans post text for ticker-like tokens: `$`-prefixed symbols of any case
//! (`$tsla`), or bare tokens of 1-5 letters already written in capitals
//! (`NVDA`). A stoplist rejects common English words and forum slang that
//! collide with real ticker symbols, which otherwise dominate the
//! false-positive rate. Extraction is pure and deterministic.

use crate::model::Post;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

/// Words that match the ticker pattern but are almost never tickers
const TICKER_STOPLIST: &[&str] = &[
    "A", "I", "AM", "AN", "AT", "BE", "BY", "DO", "GO", "IF", "IN", "IS", "IT", "ME", "MY", "NO",
    "OF", "OK", "ON", "OR", "SO", "TO", "UP", "US", "WE", "ALL", "AND", "ANY", "ARE", "BIG",
    "BUY", "CAN", "CEO", "CFO", "DD", "DID", "EPS", "ETF", "EV", "FAQ", "FOR", "FUD", "GDP",
    "GET", "HAS", "HER", "HIM", "HIS", "HOW", "IMO", "IPO", "ITS", "LOL", "LOW", "NEW", "NOT",
    "NOW", "ONE", "OUT", "OWN", "PE", "PSA", "PUT", "SEC", "SEE", "THE", "TLDR", "TOO", "TOP",
    "USA", "USD", "WAS", "WHO", "WHY", "WSB", "YOLO", "YOU", "ATH", "CPI", "FED", "FOMO", "GAIN",
    "HOLD", "HYPE", "LOSS", "MOON", "NEWS", "NEXT", "ONLY", "OVER", "SELL", "SOME", "THAN",
    "THAT", "THEM", "THEN", "THEY", "THIS", "VERY", "WEEK", "WHAT", "WHEN", "WILL", "WITH",
    "YEAR",
];

/// Extracts candidate ticker symbols from posts
pub struct MentionExtractor {
    pattern: Regex,
    stoplist: HashSet<&'static str>,
}

impl Default for MentionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MentionExtractor {
    /// Create an extractor with the built-in stoplist
    pub fn new() -> Self {
        // Compiled once here; the pattern is a literal so construction
        // cannot fail at runtime.
        #[allow(clippy::unwrap_used)]
        let pattern = Regex::new(r"\$([A-Za-z]{1,5})\b|\b([A-Z]{1,5})\b").unwrap();

        Self {
            pattern,
            stoplist: TICKER_STOPLIST.iter().copied().collect(),
        }
    }

    /// Extract the set of ticker candidates mentioned in a post
    ///
    /// Same input text yields the same candidate set every time; the
    /// `BTreeSet` keeps downstream iteration order deterministic too.
    pub fn extract(&self, post: &Post) -> BTreeSet<String> {
        let text = post.text();
        let mut tickers = BTreeSet::new();

        for captures in self.pattern.captures_iter(&text) {
            let token = captures
                .get(1)
                .or_else(|| captures.get(2))
                .map(|m| m.as_str().to_uppercase());

            if let Some(ticker) = token {
                if !self.stoplist.contains(ticker.as_str()) {
                    tickers.insert(ticker);
                }
            }
        }

        tickers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(title: &str, body: &str) -> Post {
        Post {
            id: "t3_x".to_string(),
            source: "stocks".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            score: 0,
            num_comments: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_extracts_bare_uppercase_tickers() {
        let extractor = MentionExtractor::new();
        let tickers = extractor.extract(&post("NVDA and AMD both rallied", ""));
        assert!(tickers.contains("NVDA"));
        assert!(tickers.contains("AMD"));
    }

    #[test]
    fn test_dollar_prefix_accepts_lowercase() {
        let extractor = MentionExtractor::new();
        let tickers = extractor.extract(&post("loading up on $tsla calls", ""));
        assert_eq!(tickers.into_iter().collect::<Vec<_>>(), vec!["TSLA"]);
    }

    #[test]
    fn test_stoplisted_words_never_extracted() {
        let extractor = MentionExtractor::new();
        // "FOR" collides with a valid NYSE symbol but is stoplisted.
        let tickers = extractor.extract(&post("FOR sure buying TSLA", ""));
        assert!(!tickers.contains("FOR"));
        assert_eq!(tickers.into_iter().collect::<Vec<_>>(), vec!["TSLA"]);
    }

    #[test]
    fn test_lowercase_words_ignored_without_prefix() {
        let extractor = MentionExtractor::new();
        let tickers = extractor.extract(&post("cloud software looks strong", ""));
        assert!(tickers.is_empty());
    }

    #[test]
    fn test_long_uppercase_tokens_rejected() {
        let extractor = MentionExtractor::new();
        let tickers = extractor.extract(&post("BREAKING news about GOOGL", ""));
        assert_eq!(tickers.into_iter().collect::<Vec<_>>(), vec!["GOOGL"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = MentionExtractor::new();
        let p = post("$NVDA to the moon", "NVDA MSFT $amd");
        assert_eq!(extractor.extract(&p), extractor.extract(&p));
    }

    #[test]
    fn test_body_is_scanned_too() {
        let extractor = MentionExtractor::new();
        let tickers = extractor.extract(&post("earnings thread", "watching PLTR closely"));
        assert!(tickers.contains("PLTR"));
    }
}
