//! Date-window shortcuts over [`FixturesService::fetch_matches`].
//!
//! "Today" is the clock's local calendar date, passed upstream unchanged.

use chrono::{Days, NaiveDate};

use super::core::FixturesService;
use crate::constants::windows::{RECENT_DAYS, TODAY_DAYS, UPCOMING_DAYS};
use crate::data_fetcher::cache::MatchList;
use crate::error::AppError;

/// `today .. today + 1`
pub fn today_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Days::new(TODAY_DAYS))
}

/// `today .. today + 7`
pub fn upcoming_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Days::new(UPCOMING_DAYS))
}

/// `today - 7 .. today`
pub fn recent_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Days::new(RECENT_DAYS), today)
}

impl FixturesService {
    /// All leagues, today's window
    pub async fn fetch_today_matches(&self) -> Result<MatchList, AppError> {
        let (from, to) = today_window(self.clock().today());
        self.fetch_matches(None, Some(from), Some(to)).await
    }

    pub async fn fetch_upcoming_matches(
        &self,
        league_ids: Option<&[String]>,
    ) -> Result<MatchList, AppError> {
        let (from, to) = upcoming_window(self.clock().today());
        self.fetch_matches(league_ids, Some(from), Some(to)).await
    }

    pub async fn fetch_recent_matches(
        &self,
        league_ids: Option<&[String]>,
    ) -> Result<MatchList, AppError> {
        let (from, to) = recent_window(self.clock().today());
        self.fetch_matches(league_ids, Some(from), Some(to)).await
    }
}
