use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::data_fetcher::api::{FootballApi, build_matches_endpoint};
use crate::data_fetcher::cache::{CacheStats, FixturesCache, MatchList};
use crate::data_fetcher::clock::Clock;
use crate::data_fetcher::models::MatchQuery;
use crate::data_fetcher::processors::convert_to_match;
use crate::error::AppError;

/// Fixtures lookups with a per-instance TTL cache in front of the API.
///
/// Entries are keyed by the request endpoint, so two queries share an entry
/// exactly when they would hit the same upstream URL. A fresh entry is
/// returned as the same `Arc` that was stored.
pub struct FixturesService {
    api: Arc<dyn FootballApi>,
    clock: Arc<dyn Clock>,
    cache: Mutex<FixturesCache>,
}

impl FixturesService {
    pub fn new(api: Arc<dyn FootballApi>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            api,
            clock,
            cache: Mutex::new(FixturesCache::new(ttl)),
        }
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Matches for the given leagues and date range, from cache when fresh.
    ///
    /// API errors are returned as-is and leave any cached entry untouched.
    pub async fn fetch_matches(
        &self,
        league_ids: Option<&[String]>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<MatchList, AppError> {
        let query = MatchQuery::new(league_ids, date_from, date_to);
        self.fetch_query(&query).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_query(&self, query: &MatchQuery) -> Result<MatchList, AppError> {
        let key = build_matches_endpoint(query);

        // Lock is released before the request goes out
        {
            let cache = self.cache.lock().await;
            if let Some(matches) = cache.get_fresh(&key, self.clock.now()) {
                info!("Using cached fixtures: key={}, matches={}", key, matches.len());
                return Ok(matches);
            }
        }

        // TODO: coalesce concurrent misses for the same key into one request
        info!("Fetching fixtures from API: {}", key);
        let response = self.api.fetch_matches(&key).await.map_err(|e| {
            warn!("Fixtures fetch failed for {}: {}", key, e);
            e
        })?;

        let matches: MatchList = response
            .matches
            .iter()
            .map(|dto| convert_to_match(dto, self.clock.as_ref()))
            .collect::<Vec<_>>()
            .into();
        debug!("Mapped {} matches for {}", matches.len(), key);

        self.cache
            .lock()
            .await
            .insert(key, matches.clone(), self.clock.now());

        Ok(matches)
    }

    /// Drops every cached query result, returning how many were removed.
    pub async fn clear_cache(&self) -> usize {
        self.cache.lock().await.clear()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats(self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::MatchStatus;
    use crate::testing_utils::{FixedClock, StubFootballApi, TestDataBuilder};
    use chrono::{TimeZone, Utc};

    const TTL: Duration = Duration::from_secs(300);

    fn two_matches() -> crate::data_fetcher::models::MatchesResponse {
        TestDataBuilder::matches_response(vec![
            TestDataBuilder::match_dto(1, "2024-03-10T15:00:00Z", "FINISHED").build(),
            TestDataBuilder::match_dto(2, "2024-03-10T17:30:00Z", "IN_PLAY")
                .with_full_time(None, None)
                .build(),
        ])
    }

    fn setup(api: StubFootballApi) -> (Arc<StubFootballApi>, Arc<FixedClock>, FixturesService) {
        let api = Arc::new(api);
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        ));
        let service = FixturesService::new(api.clone(), clock.clone(), TTL);
        (api, clock, service)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[tokio::test]
    async fn test_fetch_maps_matches() {
        let (api, _clock, service) = setup(StubFootballApi::new().with_response(two_matches()));

        let matches = service.fetch_matches(None, None, None).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].status, MatchStatus::Finished);
        assert_eq!(matches[1].status, MatchStatus::Live);
        assert_eq!(matches[1].score, None);
        assert_eq!(api.endpoints(), ["matches"]);
    }

    #[tokio::test]
    async fn test_cache_hit_returns_same_list_without_refetch() {
        let (api, clock, service) = setup(StubFootballApi::new().with_response(two_matches()));
        let leagues = ids(&["PL"]);

        let first = service
            .fetch_matches(Some(&leagues), date(2024, 3, 10), date(2024, 3, 11))
            .await
            .unwrap();
        clock.advance(chrono::Duration::seconds(299));
        let second = service
            .fetch_matches(Some(&leagues), date(2024, 3, 10), date(2024, 3, 11))
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_refetched() {
        let (api, clock, service) = setup(
            StubFootballApi::new()
                .with_response(two_matches())
                .with_response(TestDataBuilder::matches_response(Vec::new())),
        );

        let first = service.fetch_matches(None, None, None).await.unwrap();
        clock.advance(chrono::Duration::seconds(301));
        let second = service.fetch_matches(None, None, None).await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert_eq!(api.call_count(), 2);

        // The refreshed entry is served from cache again
        let third = service.fetch_matches(None, None, None).await.unwrap();
        assert!(Arc::ptr_eq(&second, &third));
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_each_filter_component_is_part_of_the_key() {
        let (api, _clock, service) = setup(StubFootballApi::new());
        let pl = ids(&["PL"]);
        let cl = ids(&["CL"]);

        service.fetch_matches(Some(&pl), None, None).await.unwrap();
        service.fetch_matches(Some(&cl), None, None).await.unwrap();
        service
            .fetch_matches(Some(&pl), date(2024, 3, 10), None)
            .await
            .unwrap();
        service
            .fetch_matches(Some(&pl), None, date(2024, 3, 10))
            .await
            .unwrap();
        service
            .fetch_matches(Some(&pl), date(2024, 3, 10), date(2024, 3, 11))
            .await
            .unwrap();

        assert_eq!(
            api.endpoints(),
            [
                "matches?competitions=PL",
                "matches?competitions=CL",
                "matches?competitions=PL&dateFrom=2024-03-10",
                "matches?competitions=PL&dateTo=2024-03-10",
                "matches?competitions=PL&dateFrom=2024-03-10&dateTo=2024-03-11",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_league_list_shares_key_with_none() {
        let (api, _clock, service) = setup(StubFootballApi::new());
        let empty: Vec<String> = Vec::new();

        let first = service.fetch_matches(None, None, None).await.unwrap();
        let second = service.fetch_matches(Some(&empty), None, None).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_entry() {
        let (api, clock, service) = setup(
            StubFootballApi::new()
                .with_response(two_matches())
                .with_error(AppError::api_server_error(500, "boom", "http://stub/matches")),
        );

        let fetched_at = clock.now();
        let original = service.fetch_matches(None, None, None).await.unwrap();
        clock.advance(chrono::Duration::seconds(400));

        let error = service.fetch_matches(None, None, None).await.unwrap_err();
        assert!(matches!(error, AppError::ApiServerError { status: 500, .. }));

        let stats = service.cache_stats().await;
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.expired_entries, 1);
        assert_eq!(api.call_count(), 2);

        // Back inside the original window the untouched entry is served again
        clock.set(fetched_at + chrono::Duration::seconds(100));
        let cached = service.fetch_matches(None, None, None).await.unwrap();
        assert!(Arc::ptr_eq(&original, &cached));
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_first_fetch_stores_nothing() {
        let (_api, _clock, service) = setup(
            StubFootballApi::new().with_error(AppError::network_timeout("http://stub/matches")),
        );

        let error = service.fetch_matches(None, None, None).await.unwrap_err();
        assert!(error.is_network_error());
        assert_eq!(service.cache_stats().await.entries, 0);
    }

    #[tokio::test]
    async fn test_concurrent_misses_both_fetch() {
        let (api, _clock, service) = setup(
            StubFootballApi::new()
                .with_response(two_matches())
                .with_response(two_matches()),
        );

        let results = futures::future::join_all([
            service.fetch_matches(None, None, None),
            service.fetch_matches(None, None, None),
        ])
        .await;

        assert!(results.iter().all(|r| matches!(r, Ok(m) if m.len() == 2)));
        assert_eq!(api.call_count(), 2);
        assert_eq!(service.cache_stats().await.entries, 1);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let (api, _clock, service) = setup(StubFootballApi::new());

        service.fetch_matches(None, None, None).await.unwrap();
        assert_eq!(service.clear_cache().await, 1);
        service.fetch_matches(None, None, None).await.unwrap();

        assert_eq!(api.call_count(), 2);
    }
}
