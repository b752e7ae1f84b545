//! Sector signal ingestion and ranking
//!
//! This crate turns raw social-media posts into a ranked, deduplicated list
//! of candidate stocks for a market sector. It includes:
//!
//! - Post fetching from the Reddit API (client-credentials OAuth, keyword
//!   search across per-sector subreddits)
//! - Rate limiting with distinct buckets for per-source and per-search calls
//! - Ticker mention extraction with a false-positive stoplist
//! - Lexical + engagement sentiment scoring
//! - Per-ticker aggregation into relevance-scored candidates
//! - Deterministic top-K selection
//!
//! # Architecture
//!
//! Data flows one-directionally through [`SectorSignalPipeline`]:
//! fetch → extract → score → aggregate → rank. Everything downstream of a
//! successful fetch is pure and deterministic. A single failing
//! source/keyword pair degrades the candidate list instead of failing the
//! run; only missing or rejected credentials abort.
//!
//! # Example
//!
//! ```rust,ignore
//! use prospect_signal::{RedditClient, SectorSignalPipeline, Sector, SignalConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(SignalConfig::builder().with_env_credentials()?.build()?);
//!     let client = RedditClient::new(config.clone())?;
//!     let pipeline = SectorSignalPipeline::new(client, config);
//!
//!     let report = pipeline.run(&Sector::Technology.query()).await?;
//!     for candidate in &report.candidates {
//!         println!("{} {:.3}", candidate.ticker, candidate.relevance_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod narrative;
pub mod pacer;
pub mod pipeline;
pub mod rank;
pub mod sector;
pub mod sentiment;

// Re-export main types for convenience
pub use api::{PostSource, RedditClient, RedditCredentials};
pub use config::SignalConfig;
pub use error::{Result, SignalError};
pub use extract::MentionExtractor;
pub use model::{CandidateStock, Mention, Post, SectorQuery, SectorReport};
pub use narrative::SectorNarrator;
pub use pacer::{RateBucket, RequestPacer};
pub use pipeline::SectorSignalPipeline;
pub use rank::select_top_k;
pub use sector::Sector;
pub use sentiment::SentimentScorer;
