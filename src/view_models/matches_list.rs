use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use super::favorites::FavoritesStore;
use crate::data_fetcher::cache::MatchList;
use crate::data_fetcher::fixtures::FixturesService;
use crate::data_fetcher::models::Match;
use crate::error::AppError;

/// Which date window the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchListMode {
    #[default]
    Today,
    Upcoming,
    Recent,
}

impl fmt::Display for MatchListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchListMode::Today => "Today",
            MatchListMode::Upcoming => "Upcoming",
            MatchListMode::Recent => "Recent",
        };
        f.write_str(name)
    }
}

/// State behind a matches list screen.
///
/// Upcoming and recent lists are restricted to the favorite leagues when
/// there are any; today always shows every league. A failed load records
/// the error and its message and keeps the previously loaded matches.
pub struct MatchesListModel {
    service: Arc<FixturesService>,
    favorites: Arc<dyn FavoritesStore>,
    mode: MatchListMode,
    matches: MatchList,
    is_loading: bool,
    error_message: Option<String>,
    last_error: Option<AppError>,
}

impl MatchesListModel {
    pub fn new(service: Arc<FixturesService>, favorites: Arc<dyn FavoritesStore>) -> Self {
        Self {
            service,
            favorites,
            mode: MatchListMode::default(),
            matches: Arc::from(Vec::new()),
            is_loading: false,
            error_message: None,
            last_error: None,
        }
    }

    pub fn mode(&self) -> MatchListMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatchListMode) {
        self.mode = mode;
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Hands over the error from the last failed load. The message stays.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.last_error.take()
    }

    /// `None` when no favorites are set, so the query spans all leagues
    fn favorite_league_ids(&self) -> Option<Vec<String>> {
        let ids: Vec<String> = self
            .favorites
            .favorite_leagues()
            .into_iter()
            .map(|league| league.id)
            .collect();
        if ids.is_empty() { None } else { Some(ids) }
    }

    pub async fn load(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.last_error = None;

        let result = match self.mode {
            MatchListMode::Today => self.service.fetch_today_matches().await,
            MatchListMode::Upcoming => {
                let leagues = self.favorite_league_ids();
                self.service
                    .fetch_upcoming_matches(leagues.as_deref())
                    .await
            }
            MatchListMode::Recent => {
                let leagues = self.favorite_league_ids();
                self.service.fetch_recent_matches(leagues.as_deref()).await
            }
        };

        match result {
            Ok(matches) => {
                info!("Loaded {} {} matches", matches.len(), self.mode);
                self.matches = matches;
            }
            Err(e) => {
                error!("Failed to load {} matches: {}", self.mode, e);
                self.error_message = Some(e.to_string());
                self.last_error = Some(e);
            }
        }

        self.is_loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{FixedClock, StubFootballApi, TestDataBuilder};
    use crate::view_models::favorites::InMemoryFavorites;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn model(
        api: StubFootballApi,
        favorites: InMemoryFavorites,
        ttl: Duration,
    ) -> (Arc<StubFootballApi>, MatchesListModel) {
        let api = Arc::new(api);
        let clock = Arc::new(FixedClock::on_date(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        ));
        let service = Arc::new(FixturesService::new(api.clone(), clock, ttl));
        (api, MatchesListModel::new(service, Arc::new(favorites)))
    }

    fn one_match() -> crate::data_fetcher::models::MatchesResponse {
        TestDataBuilder::matches_response(vec![
            TestDataBuilder::match_dto(9, "2024-03-10T15:00:00Z", "SCHEDULED").build(),
        ])
    }

    #[tokio::test]
    async fn test_today_ignores_favorites() {
        let (api, mut model) = model(
            StubFootballApi::new().with_response(one_match()),
            InMemoryFavorites::from_ids(["PL"]),
            Duration::from_secs(300),
        );

        model.load().await;

        assert_eq!(model.mode(), MatchListMode::Today);
        assert_eq!(model.matches().len(), 1);
        assert!(!model.is_loading());
        assert_eq!(model.error_message(), None);
        assert_eq!(
            api.endpoints(),
            ["matches?dateFrom=2024-03-10&dateTo=2024-03-11"]
        );
    }

    #[tokio::test]
    async fn test_upcoming_and_recent_use_favorites() {
        let (api, mut model) = model(
            StubFootballApi::new(),
            InMemoryFavorites::from_ids(["PL", "CL"]),
            Duration::from_secs(300),
        );

        model.set_mode(MatchListMode::Upcoming);
        model.load().await;
        model.set_mode(MatchListMode::Recent);
        model.load().await;

        assert_eq!(
            api.endpoints(),
            [
                "matches?competitions=PL,CL&dateFrom=2024-03-10&dateTo=2024-03-17",
                "matches?competitions=PL,CL&dateFrom=2024-03-03&dateTo=2024-03-10",
            ]
        );
    }

    #[tokio::test]
    async fn test_no_favorites_queries_all_leagues() {
        let (api, mut model) = model(
            StubFootballApi::new(),
            InMemoryFavorites::default(),
            Duration::from_secs(300),
        );

        model.set_mode(MatchListMode::Upcoming);
        model.load().await;

        assert_eq!(
            api.endpoints(),
            ["matches?dateFrom=2024-03-10&dateTo=2024-03-17"]
        );
    }

    #[tokio::test]
    async fn test_error_keeps_previous_matches() {
        let (_api, mut model) = model(
            StubFootballApi::new()
                .with_response(one_match())
                .with_error(AppError::api_rate_limit("slow down", "http://stub/matches")),
            InMemoryFavorites::default(),
            // Zero TTL so refresh always goes upstream
            Duration::ZERO,
        );

        model.load().await;
        model.refresh().await;

        assert_eq!(model.matches().len(), 1);
        assert!(!model.is_loading());
        let message = model.error_message().unwrap().to_string();
        assert!(message.contains("slow down"), "got {message}");

        let error = model.take_error().unwrap();
        assert!(matches!(error, AppError::ApiRateLimit { .. }));
        assert!(model.take_error().is_none());
        assert_eq!(model.error_message(), Some(message.as_str()));
    }

    #[tokio::test]
    async fn test_successful_load_clears_previous_error() {
        let (_api, mut model) = model(
            StubFootballApi::new()
                .with_error(AppError::network_timeout("http://stub/matches"))
                .with_response(one_match()),
            InMemoryFavorites::default(),
            Duration::ZERO,
        );

        model.load().await;
        assert!(model.error_message().is_some());

        model.refresh().await;
        assert_eq!(model.error_message(), None);
        assert!(model.take_error().is_none());
        assert_eq!(model.matches().len(), 1);
    }
}
