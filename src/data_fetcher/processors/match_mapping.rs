use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, warn};

use super::match_status::map_match_status;
use crate::data_fetcher::clock::Clock;
use crate::data_fetcher::models::{Match, MatchDto, MatchScore};

/// Converts an upstream match record into a [`Match`].
///
/// Never fails. An unparsable kick-off time becomes the clock's current
/// instant, an unparsable season year becomes the current calendar year and
/// an unknown status becomes scheduled.
pub fn convert_to_match(dto: &MatchDto, clock: &dyn Clock) -> Match {
    let date = parse_match_date(&dto.utc_date, clock);

    let score = dto
        .score
        .as_ref()
        .and_then(|score| score.full_time)
        .and_then(|line| match (line.home, line.away) {
            (Some(home), Some(away)) => Some(MatchScore { home, away }),
            (None, None) => None,
            (home, away) => {
                debug!(
                    "Match {} has a one-sided full-time score ({:?}-{:?}), dropping it",
                    dto.id, home, away
                );
                None
            }
        });

    Match {
        id: dto.id.to_string(),
        league_id: dto.competition.id.to_string(),
        league_name: dto.competition.name.clone(),
        season: extract_season(&dto.utc_date, clock),
        home_team_id: dto.home_team.id.to_string(),
        away_team_id: dto.away_team.id.to_string(),
        home_team_name: dto.home_team.name.clone(),
        away_team_name: dto.away_team.name.clone(),
        home_team_logo_url: dto.home_team.crest.clone(),
        away_team_logo_url: dto.away_team.crest.clone(),
        venue_id: None,
        venue_name: dto.venue.clone(),
        date,
        status: map_match_status(&dto.status),
        score,
        attendance: dto.attendance,
        timestamp: date,
    }
}

/// Season year taken from the first four characters of the upstream date.
///
/// # Examples
///
/// ```rust
/// use bsports::data_fetcher::clock::SystemClock;
/// use bsports::data_fetcher::processors::extract_season;
///
/// assert_eq!(extract_season("2023-08-12T19:00:00Z", &SystemClock), 2023);
/// ```
pub fn extract_season(utc_date: &str, clock: &dyn Clock) -> i32 {
    let prefix: String = utc_date.chars().take(4).collect();
    prefix.parse::<i32>().unwrap_or_else(|_| {
        let year = clock.today().year();
        debug!("Could not read season from '{utc_date}', using {year}");
        year
    })
}

/// Parses an RFC 3339 timestamp, with or without fractional seconds.
/// Falls back to the clock's current instant.
pub fn parse_match_date(utc_date: &str, clock: &dyn Clock) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(utc_date) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(e) => {
            warn!("Failed to parse match date '{utc_date}': {e}, using current time");
            clock.now()
        }
    }
}
