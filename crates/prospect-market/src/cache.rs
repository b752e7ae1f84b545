//! Caching layer for quote data to reduce API calls

use crate::yahoo::Quote;
use cached::{Cached, TimedCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Cache key for quote history requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    /// Stock symbol
    pub symbol: String,
    /// Named time range ("3mo", "1y", ...)
    pub range: String,
}

impl QuoteKey {
    /// Create a new cache key
    pub fn new(symbol: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            range: range.into(),
        }
    }
}

/// Thread-safe timed cache for quote history
pub struct QuoteCache {
    cache: Arc<RwLock<TimedCache<QuoteKey, Vec<Quote>>>>,
}

impl QuoteCache {
    /// Create a new cache with the specified TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get quote history from the cache
    pub async fn get(&self, key: &QuoteKey) -> Option<Vec<Quote>> {
        let mut cache = self.cache.write().await;
        cache.cache_get(key).cloned()
    }

    /// Insert quote history into the cache
    pub async fn insert(&self, key: QuoteKey, quotes: Vec<Quote>) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(key, quotes);
    }

    /// Get or fetch quote history using the provided fetcher function
    pub async fn get_or_fetch<F, Fut, E>(&self, key: QuoteKey, fetcher: F) -> Result<Vec<Quote>, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<Quote>, E>>,
    {
        if let Some(quotes) = self.get(&key).await {
            tracing::debug!(symbol = %key.symbol, range = %key.range, "quote cache hit");
            return Ok(quotes);
        }

        tracing::debug!(symbol = %key.symbol, range = %key.range, "quote cache miss");
        let quotes = fetcher().await?;
        self.insert(key, quotes.clone()).await;
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn quote(close: f64) -> Quote {
        Quote {
            symbol: "NVDA".to_string(),
            timestamp: Utc::now(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
            adjclose: close,
        }
    }

    #[tokio::test]
    async fn test_get_or_fetch_caches() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        let key = QuoteKey::new("NVDA", "3mo");

        let quotes = cache
            .get_or_fetch(key.clone(), || async { Ok::<_, ()>(vec![quote(100.0)]) })
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);

        // Second call must come from the cache, not the fetcher.
        let cached = cache
            .get_or_fetch(key, || async { Err(()) })
            .await
            .unwrap();
        assert_eq!(cached.len(), 1);
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        assert!(cache.get(&QuoteKey::new("AMD", "1y")).await.is_none());
    }
}
