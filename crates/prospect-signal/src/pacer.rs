//! Outbound request pacing
//!
//! Reddit's public API tolerates roughly one request per second per client;
//! keyword searches within a source can run a little tighter. The pacer
//! enforces a minimum interval per bucket: a caller arriving after the
//! interval has elapsed proceeds without blocking, otherwise it waits out
//! the remainder. Arrival order is preserved (FIFO), nothing more.
//!
//! The pacer is an explicit object handed to the fetcher rather than
//! module-level state, so the spacing invariant survives if fetches are
//! ever parallelized (the underlying limiter takes `&self`).

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Named class of outbound calls sharing a minimum-interval constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBucket {
    /// Coarse spacing between calls to distinct sources
    Source,
    /// Fine spacing between keyword search calls
    Search,
}

/// Enforces minimum spacing between outbound API calls per bucket
pub struct RequestPacer {
    source: DirectLimiter,
    search: DirectLimiter,
}

impl RequestPacer {
    /// Create a pacer with explicit intervals per bucket
    pub fn new(source_interval: Duration, search_interval: Duration) -> Self {
        Self {
            source: RateLimiter::direct(interval_quota(source_interval)),
            search: RateLimiter::direct(interval_quota(search_interval)),
        }
    }

    /// Block until the bucket's minimum interval has elapsed since the
    /// previous call tagged with the same bucket
    pub async fn wait_if_needed(&self, bucket: RateBucket) {
        match bucket {
            RateBucket::Source => self.source.until_ready().await,
            RateBucket::Search => self.search.until_ready().await,
        }
    }
}

/// One permit per interval, burst of one
fn interval_quota(interval: Duration) -> Quota {
    Quota::with_period(interval).unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
}
