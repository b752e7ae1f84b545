//! Data records flowing through the signal pipeline
//!
//! All records are created fresh per pipeline invocation and live no longer
//! than one sector query. There is no persistent store or cross-run state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A normalized social-media post
///
/// Immutable once fetched; owned by the ingestion pipeline for the duration
/// of one sector-analysis run and discarded after aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Upstream post identifier
    pub id: String,
    /// Source identifier (e.g., subreddit name)
    pub source: String,
    /// Post title
    pub title: String,
    /// Post body text (may be empty for link posts)
    pub body: String,
    /// Engagement upvote score
    pub score: i64,
    /// Number of comments
    pub num_comments: u64,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Title and body joined for text analysis
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// A single ticker mention derived from a post
///
/// One post may produce multiple mentions (one per distinct ticker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Extracted ticker symbol
    pub ticker: String,
    /// Identifier of the originating post
    pub post_id: String,
    /// Sentiment of the originating post, in [-1, 1]
    pub sentiment: f64,
}

/// An aggregated candidate stock for a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateStock {
    /// Ticker symbol
    pub ticker: String,
    /// Number of posts mentioning the ticker
    pub mention_count: usize,
    /// Arithmetic mean of mention sentiments, in [-1, 1]
    pub average_sentiment: f64,
    /// Blended frequency/sentiment relevance, in [0, 1]
    pub relevance_score: f64,
    /// One-line human-readable rationale
    pub rationale: String,
}

/// Read-only input describing one sector analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorQuery {
    /// Sector display name (e.g., "Technology")
    pub sector: String,
    /// Source identifiers to search (subreddit names)
    pub sources: BTreeSet<String>,
    /// Search keywords for the sector
    pub keywords: BTreeSet<String>,
    /// Maximum number of candidates to return (>= 1)
    pub top_k: usize,
}

impl SectorQuery {
    /// Create a query from explicit sources and keywords
    pub fn new(
        sector: impl Into<String>,
        sources: impl IntoIterator<Item = impl Into<String>>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        top_k: usize,
    ) -> Self {
        Self {
            sector: sector.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            top_k,
        }
    }
}

/// Output of one sector analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorReport {
    /// The analyzed sector
    pub sector: String,
    /// Candidates ordered by descending relevance, at most `top_k`
    pub candidates: Vec<CandidateStock>,
    /// Deterministic one-paragraph sector summary
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(title: &str, body: &str) -> Post {
        Post {
            id: "t3_sample".to_string(),
            source: "stocks".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            score: 0,
            num_comments: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_post_text_joins_title_and_body() {
        let post = sample_post("NVDA earnings", "beat expectations");
        assert_eq!(post.text(), "NVDA earnings beat expectations");
    }

    #[test]
    fn test_sector_query_dedupes_sources() {
        let query = SectorQuery::new(
            "Technology",
            ["stocks", "investing", "stocks"],
            ["tech", "AI"],
            5,
        );
        assert_eq!(query.sources.len(), 2);
        assert_eq!(query.keywords.len(), 2);
        assert_eq!(query.top_k, 5);
    }
}
