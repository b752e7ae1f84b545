//! Post sentiment scoring
//!
//! Sentiment blends two bounded components:
//!
//! - a lexical polarity from positive/negative cue counts over the post
//!   text, `(pos - neg) / (pos + neg)`, zero when no cues are present;
//! - an engagement magnitude from upvotes + comments normalized against a
//!   reference scale (attention as confidence, not polarity).
//!
//! Cues are matched as substrings of the lowercased text on purpose: the
//! lexicon contains emoji and multi-word phrases ("stay away") that
//! word-boundary tokenization would miss.

use crate::config::SignalConfig;
use crate::model::Post;
use std::sync::Arc;

/// Positive sentiment cues
const POSITIVE_CUES: &[&str] = &[
    "bullish", "buy", "long", "moon", "rocket", "🚀", "💎", "diamond", "hands", "hodl", "profit",
    "gain", "up", "rise", "surge", "jump", "climb", "soar", "rally", "breakout", "strong",
    "solid", "excellent", "amazing", "incredible", "fantastic", "love", "like",
];

/// Negative sentiment cues
const NEGATIVE_CUES: &[&str] = &[
    "bearish", "sell", "short", "dump", "crash", "fall", "drop", "decline", "plunge", "tank",
    "loss", "down", "weak", "terrible", "awful", "horrible", "hate", "dislike", "avoid",
    "stay away",
];

/// Computes a bounded sentiment value per post
pub struct SentimentScorer {
    config: Arc<SignalConfig>,
}

impl SentimentScorer {
    /// Create a scorer using the configured blend weights
    pub fn new(config: Arc<SignalConfig>) -> Self {
        Self { config }
    }

    /// Score a post into [-1, 1]
    pub fn score(&self, post: &Post) -> f64 {
        let lexical = self.lexical_component(post);
        let engagement = self.engagement_component(post);

        let blended = self.config.lexical_weight * lexical
            + self.config.engagement_weight * engagement;
        blended.clamp(-1.0, 1.0)
    }

    /// Lexical polarity in [-1, 1], 0.0 when no cues are present
    pub fn lexical_component(&self, post: &Post) -> f64 {
        let text = post.text().to_lowercase();

        let positive = POSITIVE_CUES.iter().filter(|cue| text.contains(*cue)).count();
        let negative = NEGATIVE_CUES.iter().filter(|cue| text.contains(*cue)).count();

        if positive + negative == 0 {
            0.0
        } else {
            (positive as f64 - negative as f64) / (positive + negative) as f64
        }
    }

    /// Engagement magnitude in [-1, 1]
    pub fn engagement_component(&self, post: &Post) -> f64 {
        let attention = post.score as f64 + post.num_comments as f64;
        (attention / self.config.engagement_reference).clamp(-1.0, 1.0)
    }
}
