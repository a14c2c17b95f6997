use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /matches`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "resultSet", default, skip_serializing_if = "Option::is_none")]
    pub result_set: Option<ResultSet>,
    pub matches: Vec<MatchDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResultSet {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDto {
    pub id: i64,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    pub status: String,
    #[serde(default)]
    pub matchday: Option<u32>,
    pub competition: CompetitionDto,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamDto,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamDto,
    #[serde(default)]
    pub score: Option<ScoreDto>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub attendance: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub emblem: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreDto {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "fullTime", default)]
    pub full_time: Option<ScoreLineDto>,
    #[serde(rename = "halfTime", default)]
    pub half_time: Option<ScoreLineDto>,
}

/// One side-by-side score line. Either side may be null upstream
/// (e.g. `fullTime` before kick-off).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScoreLineDto {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}
