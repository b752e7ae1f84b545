//! Configuration for sector signal operations

use crate::error::{Result, SignalError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "prospect-rs/0.1";

/// Reddit API credentials for the client-credentials OAuth flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditCredentials {
    /// Application client id
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
    /// User-Agent header (Reddit requires a descriptive one)
    pub user_agent: String,
}

impl RedditCredentials {
    /// Load credentials from `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`,
    /// and optionally `REDDIT_USER_AGENT`
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: prospect_utils::required_env("REDDIT_CLIENT_ID")?,
            client_secret: prospect_utils::required_env("REDDIT_CLIENT_SECRET")?,
            user_agent: prospect_utils::optional_env("REDDIT_USER_AGENT", DEFAULT_USER_AGENT),
        })
    }
}

/// Configuration for sector signal operations
///
/// The scoring weights and reference scales are policy constants observed
/// in the source system, not learned values; they are configurable here
/// rather than hardcoded in the scorer and aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Weight of the lexical component in post sentiment
    pub lexical_weight: f64,

    /// Weight of the engagement component in post sentiment
    pub engagement_weight: f64,

    /// Engagement normalization scale (upvotes + comments at full signal)
    pub engagement_reference: f64,

    /// Weight of mention frequency in candidate relevance
    pub frequency_weight: f64,

    /// Weight of sentiment magnitude in candidate relevance
    pub sentiment_weight: f64,

    /// Mention count at which the frequency signal saturates
    pub mention_reference: f64,

    /// Default number of candidates to select
    pub default_top_k: usize,

    /// Minimum spacing between calls to distinct sources
    pub source_interval: Duration,

    /// Minimum spacing between keyword search calls
    pub search_interval: Duration,

    /// Keyword searches issued per source (upstream quota guard)
    pub max_keywords_per_source: usize,

    /// Posts requested per search call
    pub posts_per_search: u32,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Reddit API credentials (required before any fetch)
    pub credentials: Option<RedditCredentials>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.7,
            engagement_weight: 0.3,
            engagement_reference: 100.0,
            frequency_weight: 0.6,
            sentiment_weight: 0.4,
            mention_reference: 100.0,
            default_top_k: 5,
            source_interval: Duration::from_secs(1),
            search_interval: Duration::from_millis(500),
            max_keywords_per_source: 3,
            posts_per_search: 25,
            request_timeout: Duration::from_secs(30),
            credentials: None,
        }
    }
}

impl SignalConfig {
    /// Create a new configuration builder
    pub fn builder() -> SignalConfigBuilder {
        SignalConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("lexical_weight", self.lexical_weight),
            ("engagement_weight", self.engagement_weight),
            ("frequency_weight", self.frequency_weight),
            ("sentiment_weight", self.sentiment_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(SignalError::Config(format!(
                    "{name} must be within [0, 1], got {weight}"
                )));
            }
        }

        if self.engagement_reference <= 0.0 || self.mention_reference <= 0.0 {
            return Err(SignalError::Config(
                "reference scales must be positive".to_string(),
            ));
        }

        if self.default_top_k == 0 {
            return Err(SignalError::Config(
                "default_top_k must be at least 1".to_string(),
            ));
        }

        if self.max_keywords_per_source == 0 {
            return Err(SignalError::Config(
                "max_keywords_per_source must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Credentials, or a configuration error when absent
    ///
    /// Called by the fetcher before any network activity so a misconfigured
    /// run fails fast instead of after a round of empty searches.
    pub fn require_credentials(&self) -> Result<&RedditCredentials> {
        self.credentials.as_ref().ok_or_else(|| {
            SignalError::Config(
                "Reddit credentials missing: set REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET"
                    .to_string(),
            )
        })
    }
}

/// Builder for SignalConfig
#[derive(Debug, Default)]
pub struct SignalConfigBuilder {
    lexical_weight: Option<f64>,
    engagement_weight: Option<f64>,
    engagement_reference: Option<f64>,
    frequency_weight: Option<f64>,
    sentiment_weight: Option<f64>,
    mention_reference: Option<f64>,
    default_top_k: Option<usize>,
    source_interval: Option<Duration>,
    search_interval: Option<Duration>,
    max_keywords_per_source: Option<usize>,
    posts_per_search: Option<u32>,
    request_timeout: Option<Duration>,
    credentials: Option<RedditCredentials>,
}

impl SignalConfigBuilder {
    /// Set the sentiment blend weights (lexical, engagement)
    pub fn sentiment_weights(mut self, lexical: f64, engagement: f64) -> Self {
        self.lexical_weight = Some(lexical);
        self.engagement_weight = Some(engagement);
        self
    }

    /// Set the relevance blend weights (frequency, sentiment magnitude)
    pub fn relevance_weights(mut self, frequency: f64, sentiment: f64) -> Self {
        self.frequency_weight = Some(frequency);
        self.sentiment_weight = Some(sentiment);
        self
    }

    /// Set the engagement normalization scale
    pub fn engagement_reference(mut self, reference: f64) -> Self {
        self.engagement_reference = Some(reference);
        self
    }

    /// Set the mention count saturation scale
    pub fn mention_reference(mut self, reference: f64) -> Self {
        self.mention_reference = Some(reference);
        self
    }

    /// Set the default top-K
    pub fn default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = Some(top_k);
        self
    }

    /// Set the per-source pacing interval
    pub fn source_interval(mut self, interval: Duration) -> Self {
        self.source_interval = Some(interval);
        self
    }

    /// Set the per-search pacing interval
    pub fn search_interval(mut self, interval: Duration) -> Self {
        self.search_interval = Some(interval);
        self
    }

    /// Set the keyword budget per source
    pub fn max_keywords_per_source(mut self, max: usize) -> Self {
        self.max_keywords_per_source = Some(max);
        self
    }

    /// Set the number of posts per search call
    pub fn posts_per_search(mut self, limit: u32) -> Self {
        self.posts_per_search = Some(limit);
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set Reddit credentials explicitly
    pub fn credentials(mut self, credentials: RedditCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Load Reddit credentials from the environment
    pub fn with_env_credentials(mut self) -> Result<Self> {
        self.credentials = Some(RedditCredentials::from_env()?);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<SignalConfig> {
        let defaults = SignalConfig::default();

        let config = SignalConfig {
            lexical_weight: self.lexical_weight.unwrap_or(defaults.lexical_weight),
            engagement_weight: self.engagement_weight.unwrap_or(defaults.engagement_weight),
            engagement_reference: self
                .engagement_reference
                .unwrap_or(defaults.engagement_reference),
            frequency_weight: self.frequency_weight.unwrap_or(defaults.frequency_weight),
            sentiment_weight: self.sentiment_weight.unwrap_or(defaults.sentiment_weight),
            mention_reference: self.mention_reference.unwrap_or(defaults.mention_reference),
            default_top_k: self.default_top_k.unwrap_or(defaults.default_top_k),
            source_interval: self.source_interval.unwrap_or(defaults.source_interval),
            search_interval: self.search_interval.unwrap_or(defaults.search_interval),
            max_keywords_per_source: self
                .max_keywords_per_source
                .unwrap_or(defaults.max_keywords_per_source),
            posts_per_search: self.posts_per_search.unwrap_or(defaults.posts_per_search),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            credentials: self.credentials,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignalConfig::default();
        assert_eq!(config.lexical_weight, 0.7);
        assert_eq!(config.engagement_weight, 0.3);
        assert_eq!(config.frequency_weight, 0.6);
        assert_eq!(config.sentiment_weight, 0.4);
        assert_eq!(config.default_top_k, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SignalConfig::builder()
            .sentiment_weights(0.8, 0.2)
            .mention_reference(50.0)
            .default_top_k(3)
            .build()
            .unwrap();

        assert_eq!(config.lexical_weight, 0.8);
        assert_eq!(config.engagement_weight, 0.2);
        assert_eq!(config.mention_reference, 50.0);
        assert_eq!(config.default_top_k, 3);
    }

    #[test]
    fn test_validation_rejects_out_of_range_weight() {
        let result = SignalConfig::builder().sentiment_weights(1.5, 0.3).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_top_k() {
        let result = SignalConfig::builder().default_top_k(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_require_credentials_without_any() {
        let config = SignalConfig::default();
        let err = config.require_credentials().unwrap_err();
        assert!(err.is_fatal());
    }
}
