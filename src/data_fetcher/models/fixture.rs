use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized match status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Paused,
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Live => "Live",
            MatchStatus::Paused => "Half-time",
            MatchStatus::Finished => "Full-time",
            MatchStatus::Postponed => "Postponed",
            MatchStatus::Cancelled => "Cancelled",
        }
    }

    /// Live or paused at half-time
    pub fn is_in_progress(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Paused)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full-time score. Exists only when both sides are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: u32,
    pub away: u32,
}

/// A single fixture, normalized from the upstream wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub league_id: String,
    pub league_name: String,
    pub season: i32,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_team_logo_url: Option<String>,
    pub away_team_logo_url: Option<String>,
    pub venue_id: Option<String>,
    pub venue_name: Option<String>,
    pub date: DateTime<Utc>,
    pub status: MatchStatus,
    pub score: Option<MatchScore>,
    pub attendance: Option<u32>,
    /// When the record was observed; the upstream source only offers the kick-off time.
    pub timestamp: DateTime<Utc>,
}

impl Match {
    pub fn home_score(&self) -> Option<u32> {
        self.score.map(|s| s.home)
    }

    pub fn away_score(&self) -> Option<u32> {
        self.score.map(|s| s.away)
    }

    /// "2 - 1" when a full-time score exists, "vs" otherwise
    pub fn score_display(&self) -> String {
        match self.score {
            Some(MatchScore { home, away }) => format!("{home} - {away}"),
            None => "vs".to_string(),
        }
    }
}
