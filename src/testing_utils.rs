//! Fakes and builders shared by unit and integration tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::data_fetcher::api::FootballApi;
use crate::data_fetcher::clock::Clock;
use crate::data_fetcher::models::{
    CompetitionDto, Match, MatchDto, MatchScore, MatchStatus, MatchesResponse, ScoreDto,
    ScoreLineDto, TeamDto,
};
use crate::error::AppError;

/// Clock frozen at a settable instant. `today()` is the UTC date of that instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Noon UTC on the given calendar date
    pub fn on_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::at(noon.and_utc())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Scripted [`FootballApi`]: replies are served in order, then an empty
/// listing once the queue runs dry. Every requested endpoint is recorded.
#[derive(Debug, Default)]
pub struct StubFootballApi {
    replies: Mutex<VecDeque<Result<MatchesResponse, AppError>>>,
    endpoints: Mutex<Vec<String>>,
}

impl StubFootballApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: MatchesResponse) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn with_error(self, error: AppError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, reply: Result<MatchesResponse, AppError>) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.endpoints().len()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.endpoints
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl FootballApi for StubFootballApi {
    async fn fetch_matches(&self, endpoint: &str) -> Result<MatchesResponse, AppError> {
        self.endpoints
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(endpoint.to_string());

        // Suspend once so concurrent callers interleave like a real request
        tokio::task::yield_now().await;

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        reply.unwrap_or_else(|| Ok(TestDataBuilder::matches_response(Vec::new())))
    }
}

/// Test utilities for creating upstream and domain data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Arsenal v Chelsea in the Premier League with a 1-0 full-time score
    pub fn match_dto(id: i64, utc_date: &str, status: &str) -> MatchDtoBuilder {
        MatchDtoBuilder {
            dto: MatchDto {
                id,
                utc_date: utc_date.to_string(),
                status: status.to_string(),
                matchday: Some(1),
                competition: CompetitionDto {
                    id: 2021,
                    name: "Premier League".to_string(),
                    code: Some("PL".to_string()),
                    emblem: None,
                },
                home_team: Self::team(57, "Arsenal FC", "ARS"),
                away_team: Self::team(61, "Chelsea FC", "CHE"),
                score: Some(ScoreDto {
                    full_time: Some(ScoreLineDto {
                        home: Some(1),
                        away: Some(0),
                    }),
                    ..ScoreDto::default()
                }),
                venue: None,
                attendance: None,
            },
        }
    }

    pub fn matches_response(matches: Vec<MatchDto>) -> MatchesResponse {
        MatchesResponse {
            result_set: None,
            matches,
        }
    }

    /// A finished domain match with the given id
    pub fn domain_match(id: &str) -> Match {
        let date = DateTime::parse_from_rfc3339("2024-03-10T15:00:00Z")
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default();

        Match {
            id: id.to_string(),
            league_id: "2021".to_string(),
            league_name: "Premier League".to_string(),
            season: 2024,
            home_team_id: "57".to_string(),
            away_team_id: "61".to_string(),
            home_team_name: "Arsenal FC".to_string(),
            away_team_name: "Chelsea FC".to_string(),
            home_team_logo_url: None,
            away_team_logo_url: None,
            venue_id: None,
            venue_name: None,
            date,
            status: MatchStatus::Finished,
            score: Some(MatchScore { home: 1, away: 0 }),
            attendance: None,
            timestamp: date,
        }
    }

    fn team(id: i64, name: &str, tla: &str) -> TeamDto {
        TeamDto {
            id,
            name: name.to_string(),
            short_name: None,
            tla: Some(tla.to_string()),
            crest: Some(format!("https://crests.football-data.org/{id}.png")),
        }
    }
}

/// Tweaks a [`MatchDto`] produced by [`TestDataBuilder::match_dto`]
#[derive(Debug, Clone)]
pub struct MatchDtoBuilder {
    dto: MatchDto,
}

impl MatchDtoBuilder {
    pub fn with_full_time(mut self, home: Option<u32>, away: Option<u32>) -> Self {
        let score = self.dto.score.get_or_insert_with(ScoreDto::default);
        score.full_time = Some(ScoreLineDto { home, away });
        self
    }

    pub fn with_venue(mut self, venue: &str) -> Self {
        self.dto.venue = Some(venue.to_string());
        self
    }

    pub fn with_attendance(mut self, attendance: u32) -> Self {
        self.dto.attendance = Some(attendance);
        self
    }

    pub fn build(self) -> MatchDto {
        self.dto
    }
}
