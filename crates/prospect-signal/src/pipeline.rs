//! Sector signal pipeline
//!
//! Single linear forward pass: fetch → extract → score → aggregate → rank.
//! Everything downstream of the fetch is pure and deterministic. The
//! pipeline never fails on missing data; an empty sector produces an empty
//! report so downstream stages can degrade gracefully.

use crate::aggregate::{aggregate, sentiment_label};
use crate::api::PostSource;
use crate::config::SignalConfig;
use crate::error::Result;
use crate::extract::MentionExtractor;
use crate::model::{CandidateStock, Mention, SectorQuery, SectorReport};
use crate::rank::select_top_k;
use crate::sentiment::SentimentScorer;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns raw posts into a ranked candidate report for one sector
pub struct SectorSignalPipeline<S: PostSource> {
    source: S,
    extractor: MentionExtractor,
    scorer: SentimentScorer,
    config: Arc<SignalConfig>,
}

impl<S: PostSource> SectorSignalPipeline<S> {
    /// Create a pipeline over the given post source
    pub fn new(source: S, config: Arc<SignalConfig>) -> Self {
        Self {
            source,
            extractor: MentionExtractor::new(),
            scorer: SentimentScorer::new(config.clone()),
            config,
        }
    }

    /// Run one sector analysis
    ///
    /// The only fatal failures are configuration and authentication errors
    /// from the fetch; everything else degrades to a smaller or empty
    /// candidate list.
    pub async fn run(&self, query: &SectorQuery) -> Result<SectorReport> {
        let posts = self.source.fetch(query).await?;
        info!(sector = %query.sector, posts = posts.len(), "fetched sector posts");

        if posts.is_empty() {
            return Ok(SectorReport {
                sector: query.sector.clone(),
                candidates: Vec::new(),
                summary: format!(
                    "No trending Reddit data found for {} sector.",
                    query.sector
                ),
            });
        }

        let mut mentions = Vec::new();
        for post in &posts {
            // Defensive: a post with no text cannot carry a signal.
            if post.title.is_empty() && post.body.is_empty() {
                debug!(post_id = %post.id, "skipping post without text");
                continue;
            }

            let tickers = self.extractor.extract(post);
            if tickers.is_empty() {
                continue;
            }

            let sentiment = self.scorer.score(post);
            for ticker in tickers {
                mentions.push(Mention {
                    ticker,
                    post_id: post.id.clone(),
                    sentiment,
                });
            }
        }

        if mentions.is_empty() {
            return Ok(SectorReport {
                sector: query.sector.clone(),
                candidates: Vec::new(),
                summary: format!(
                    "No stock mentions found for {} sector in Reddit discussions.",
                    query.sector
                ),
            });
        }

        let candidates: Vec<CandidateStock> =
            aggregate(&mentions, &self.config).into_values().collect();
        let selected = select_top_k(candidates, query.top_k);
        let summary = summarize(&query.sector, &selected);

        Ok(SectorReport {
            sector: query.sector.clone(),
            candidates: selected,
            summary,
        })
    }
}

/// Deterministic sector summary over the selected candidates
fn summarize(sector: &str, candidates: &[CandidateStock]) -> String {
    let Some(top) = candidates.first() else {
        return format!("Limited Reddit discussion found for {sector} sector.");
    };

    let average: f64 = candidates
        .iter()
        .map(|c| c.average_sentiment)
        .sum::<f64>()
        / candidates.len() as f64;
    let overall = sentiment_label(average);
    let strong = candidates
        .iter()
        .filter(|c| c.relevance_score > 0.5)
        .count();

    format!(
        "Reddit sentiment for {sector} sector is {overall}. Top trending stock is {} \
         with {} mentions. Retail investors are showing strong interest in {strong} \
         stocks in this sector.",
        top.ticker, top.mention_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPostSource;
    use crate::model::Post;
    use chrono::Utc;

    fn post(id: &str, title: &str, score: i64, num_comments: u64) -> Post {
        Post {
            id: id.to_string(),
            source: "stocks".to_string(),
            title: title.to_string(),
            body: String::new(),
            score,
            num_comments,
            created_at: Utc::now(),
        }
    }

    fn pipeline_with(posts: Vec<Post>) -> SectorSignalPipeline<MockPostSource> {
        let mut source = MockPostSource::new();
        source
            .expect_fetch()
            .returning(move |_| Ok(posts.clone()));
        SectorSignalPipeline::new(source, Arc::new(SignalConfig::default()))
    }

    fn query(top_k: usize) -> SectorQuery {
        SectorQuery::new("Technology", ["stocks"], ["tech"], top_k)
    }

    #[tokio::test]
    async fn test_two_nvda_posts_fold_into_one_candidate() {
        // Lexical components 0.8 (9 positive, 1 negative cue) and 0.4
        // (7 positive, 3 negative), zero engagement. Per-post sentiments
        // are 0.56 and 0.28, so the candidate mean is 0.42.
        let pipeline = pipeline_with(vec![
            post(
                "p1",
                "NVDA bullish buy long moon rocket profit gain rise surge weak",
                0,
                0,
            ),
            post(
                "p2",
                "NVDA bullish buy long moon rocket profit gain weak drop tank",
                0,
                0,
            ),
        ]);

        let report = pipeline.run(&query(5)).await.unwrap();
        assert_eq!(report.candidates.len(), 1);

        let nvda = &report.candidates[0];
        assert_eq!(nvda.ticker, "NVDA");
        assert_eq!(nvda.mention_count, 2);
        assert!((nvda.average_sentiment - 0.42).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty_report() {
        // The fetcher skips failing source/keyword pairs, so a run where
        // every search returned HTTP 500 surfaces as zero posts.
        let pipeline = pipeline_with(Vec::new());

        let report = pipeline.run(&query(5)).await.unwrap();
        assert!(report.candidates.is_empty());
        assert!(report.summary.contains("No trending Reddit data"));
    }

    #[tokio::test]
    async fn test_fewer_tickers_than_top_k() {
        let pipeline = pipeline_with(vec![
            post("p1", "NVDA looks strong", 0, 0),
            post("p2", "AMD bullish", 0, 0),
            post("p3", "MSFT rally incoming", 0, 0),
        ]);

        let report = pipeline.run(&query(5)).await.unwrap();
        assert_eq!(report.candidates.len(), 3);
    }

    #[tokio::test]
    async fn test_stoplisted_token_produces_no_candidate() {
        let pipeline = pipeline_with(vec![post("p1", "FOR sure buying TSLA", 0, 0)]);

        let report = pipeline.run(&query(5)).await.unwrap();
        let tickers: Vec<&str> = report
            .candidates
            .iter()
            .map(|c| c.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["TSLA"]);
    }

    #[tokio::test]
    async fn test_posts_without_mentions_report_gracefully() {
        let pipeline = pipeline_with(vec![post("p1", "the market felt quiet today", 0, 0)]);

        let report = pipeline.run(&query(5)).await.unwrap();
        assert!(report.candidates.is_empty());
        assert!(report.summary.contains("No stock mentions"));
    }

    #[tokio::test]
    async fn test_textless_posts_are_skipped() {
        let pipeline = pipeline_with(vec![post("p1", "", 0, 0), post("p2", "NVDA rally", 5, 1)]);

        let report = pipeline.run(&query(5)).await.unwrap();
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.candidates[0].ticker, "NVDA");
    }

    #[tokio::test]
    async fn test_summary_names_top_candidate() {
        let pipeline = pipeline_with(vec![
            post("p1", "NVDA bullish rally", 0, 0),
            post("p2", "NVDA breakout surge", 0, 0),
            post("p3", "AMD looks solid", 0, 0),
        ]);

        let report = pipeline.run(&query(5)).await.unwrap();
        assert!(report.summary.contains("NVDA"));
        assert!(report.summary.contains("Technology"));
    }
}
