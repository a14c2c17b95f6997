//! Cache data structures with TTL support

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::data_fetcher::models::Match;

/// Shared, immutable list of matches handed out by the fixtures cache.
pub type MatchList = Arc<[Match]>;

/// One fixtures query result and when it was fetched
#[derive(Debug, Clone)]
pub struct CachedMatches {
    pub matches: MatchList,
    pub fetched_at: DateTime<Utc>,
}

impl CachedMatches {
    pub fn new(matches: MatchList, fetched_at: DateTime<Utc>) -> Self {
        Self {
            matches,
            fetched_at,
        }
    }

    /// Time since the entry was fetched. A clock that went backwards counts as zero.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Fresh while `now - fetched_at < ttl`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = self.age(now);
        let is_fresh = age < ttl;

        debug!(
            "Cache freshness check: age={:?}, ttl={:?}, is_fresh={}",
            age, ttl, is_fresh
        );

        is_fresh
    }
}
