use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, trace};

use super::types::{CachedMatches, MatchList};

/// Fixtures query results keyed by request endpoint.
///
/// Expiry is evaluated lazily on read. Stale entries stay in the map until
/// the same key is fetched again, so a failed refresh never evicts data.
#[derive(Debug, Clone)]
pub struct FixturesCache {
    entries: HashMap<String, CachedMatches>,
    ttl: Duration,
}

/// Cache size snapshot for monitoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh_entries: usize,
    pub expired_entries: usize,
    pub ttl: Duration,
}

impl FixturesCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the stored list when the entry for `key` is still fresh at `now`.
    pub fn get_fresh(&self, key: &str, now: DateTime<Utc>) -> Option<MatchList> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                debug!(
                    "Cache hit: key={}, matches={}, age={:?}",
                    key,
                    entry.matches.len(),
                    entry.age(now)
                );
                Some(entry.matches.clone())
            }
            Some(entry) => {
                debug!(
                    "Cache entry expired: key={}, age={:?}, ttl={:?}",
                    key,
                    entry.age(now),
                    self.ttl
                );
                None
            }
            None => {
                trace!("Cache miss: key={}", key);
                None
            }
        }
    }

    /// Stores `matches` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: String, matches: MatchList, now: DateTime<Utc>) {
        let count = matches.len();
        let replaced = self
            .entries
            .insert(key.clone(), CachedMatches::new(matches, now))
            .is_some();

        info!(
            "Cached fixtures: key={}, matches={}, replaced={}",
            key, count, replaced
        );
    }

    /// Drops every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        info!("Cleared fixtures cache ({} entries)", count);
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> CacheStats {
        let fresh_entries = self
            .entries
            .values()
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .count();

        CacheStats {
            entries: self.entries.len(),
            fresh_entries,
            expired_entries: self.entries.len() - fresh_entries,
            ttl: self.ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn list(ids: &[&str]) -> MatchList {
        ids.iter()
            .map(|id| TestDataBuilder::domain_match(id))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_get_fresh_returns_same_allocation() {
        let mut cache = FixturesCache::new(Duration::from_secs(300));
        let stored = list(&["1", "2"]);
        cache.insert("matches".to_string(), stored.clone(), t0());

        let hit = cache.get_fresh("matches", t0()).unwrap();
        assert!(Arc::ptr_eq(&hit, &stored));
    }

    #[test]
    fn test_expired_entry_is_kept_but_not_returned() {
        let mut cache = FixturesCache::new(Duration::from_secs(300));
        cache.insert("matches".to_string(), list(&["1"]), t0());

        let later = t0() + chrono::Duration::seconds(301);
        assert!(cache.get_fresh("matches", later).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut cache = FixturesCache::new(Duration::from_secs(300));
        cache.insert("matches".to_string(), list(&["1"]), t0());
        let later = t0() + chrono::Duration::seconds(400);
        cache.insert("matches".to_string(), list(&["2", "3"]), later);

        let hit = cache.get_fresh("matches", later).unwrap();
        assert_eq!(hit.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = FixturesCache::new(Duration::from_secs(300));
        cache.insert("matches?dateFrom=2024-03-10".to_string(), list(&["1"]), t0());

        assert!(cache.get_fresh("matches?dateTo=2024-03-10", t0()).is_none());
        assert!(cache.get_fresh("matches", t0()).is_none());
    }

    #[test]
    fn test_stats_and_clear() {
        let mut cache = FixturesCache::new(Duration::from_secs(300));
        cache.insert("a".to_string(), list(&["1"]), t0());
        cache.insert(
            "b".to_string(),
            list(&["2"]),
            t0() + chrono::Duration::seconds(200),
        );

        let stats = cache.stats(t0() + chrono::Duration::seconds(350));
        assert_eq!(
            stats,
            CacheStats {
                entries: 2,
                fresh_entries: 1,
                expired_entries: 1,
                ttl: Duration::from_secs(300),
            }
        );

        assert_eq!(cache.clear(), 2);
        assert!(cache.is_empty());
    }
}
