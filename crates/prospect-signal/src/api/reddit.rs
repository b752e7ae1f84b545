//! Reddit API client for sector post ingestion
//!
//! Uses the client-credentials OAuth flow: a bearer token is acquired from
//! `www.reddit.com` and searches go through `oauth.reddit.com`. Token
//! expiry is not tracked; a token lives longer than any single sector run.
//!
//! Partial-failure policy: one failing source/keyword search is logged and
//! skipped so a flaky subreddit cannot sink the whole sector analysis.
//! Credential problems abort immediately since no data can ever arrive.

use crate::config::SignalConfig;
use crate::error::{Result, SignalError};
use crate::model::{Post, SectorQuery};
use crate::pacer::{RateBucket, RequestPacer};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

/// Source of normalized posts for a sector query
///
/// Re-invoking `fetch` issues fresh upstream calls; implementations do not
/// cache across invocations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch all posts matching the query's sources and keywords
    async fn fetch(&self, query: &SectorQuery) -> Result<Vec<Post>>;
}

/// Reddit API client with request pacing
pub struct RedditClient {
    client: Client,
    config: Arc<SignalConfig>,
    pacer: RequestPacer,
}

impl RedditClient {
    /// Create a new Reddit client from the signal configuration
    pub fn new(config: Arc<SignalConfig>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(SignalError::Network)?;
        let pacer = RequestPacer::new(config.source_interval, config.search_interval);

        Ok(Self {
            client,
            config,
            pacer,
        })
    }

    /// Acquire a bearer token via the client-credentials flow
    async fn access_token(&self) -> Result<String> {
        let credentials = self.config.require_credentials()?;

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header("User-Agent", &credentials.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SignalError::Auth(format!(
                "token request returned {status}"
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Search one subreddit for one keyword
    async fn search_posts(
        &self,
        token: &str,
        source: &str,
        keyword: &str,
    ) -> Result<Vec<Post>> {
        let credentials = self.config.require_credentials()?;

        let url = format!("{OAUTH_BASE_URL}/r/{source}/search");
        let limit = self.config.posts_per_search.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("User-Agent", &credentials.user_agent)
            .query(&[
                ("q", keyword),
                ("restrict_sr", "on"),
                ("sort", "hot"),
                ("t", "week"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SignalError::Auth(format!(
                "search on r/{source} rejected with {status}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SignalError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let listing: Listing = response.json().await?;
        Ok(parse_listing(listing, source))
    }
}

#[async_trait]
impl PostSource for RedditClient {
    async fn fetch(&self, query: &SectorQuery) -> Result<Vec<Post>> {
        // Fail fast on missing credentials before touching the network.
        self.config.require_credentials()?;
        let token = self.access_token().await?;

        let mut posts = Vec::new();
        for source in &query.sources {
            self.pacer.wait_if_needed(RateBucket::Source).await;

            let keywords = query
                .keywords
                .iter()
                .take(self.config.max_keywords_per_source);
            for keyword in keywords {
                self.pacer.wait_if_needed(RateBucket::Search).await;

                match self.search_posts(&token, source, keyword).await {
                    Ok(batch) => {
                        debug!(source, keyword, count = batch.len(), "fetched posts");
                        posts.extend(batch);
                    }
                    Err(err) if err.is_fatal() => return Err(err),
                    Err(err) => {
                        warn!(source, keyword, error = %err, "skipping failed search");
                    }
                }
            }
        }

        Ok(posts)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RedditPostData,
}

#[derive(Debug, Deserialize)]
struct RedditPostData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: u64,
    #[serde(default)]
    created_utc: f64,
}

fn parse_listing(listing: Listing, source: &str) -> Vec<Post> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| {
            let data = child.data;
            Post {
                id: data.id,
                source: source.to_string(),
                title: data.title,
                body: data.selftext,
                score: data.score,
                num_comments: data.num_comments,
                created_at: DateTime::from_timestamp(data.created_utc as i64, 0)
                    .unwrap_or_else(Utc::now),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LISTING: &str = r#"{
        "data": {
            "children": [
                {
                    "data": {
                        "id": "abc123",
                        "title": "NVDA crushed earnings",
                        "selftext": "Long since 2020",
                        "score": 420,
                        "num_comments": 69,
                        "created_utc": 1735689600.0
                    }
                },
                {
                    "data": {
                        "id": "def456",
                        "title": "Semis looking strong"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_listing() {
        let listing: Listing = serde_json::from_str(SAMPLE_LISTING).unwrap();
        let posts = parse_listing(listing, "stocks");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "abc123");
        assert_eq!(posts[0].source, "stocks");
        assert_eq!(posts[0].score, 420);
        assert_eq!(posts[0].num_comments, 69);
        assert_eq!(posts[0].created_at.timestamp(), 1_735_689_600);

        // Missing optional fields default rather than fail the payload.
        assert_eq!(posts[1].score, 0);
        assert_eq!(posts[1].body, "");
    }

    #[test]
    fn test_parse_empty_listing() {
        let listing: Listing = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(parse_listing(listing, "stocks").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_without_credentials_fails_fast() {
        let config = Arc::new(SignalConfig::default());
        let client = RedditClient::new(config).unwrap();
        let query = crate::sector::Sector::Technology.query();

        let err = client.fetch(&query).await.unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }
}
