pub mod fixture;
pub mod matches;
pub mod query;

pub use fixture::{Match, MatchScore, MatchStatus};
pub use matches::{
    CompetitionDto, MatchDto, MatchesResponse, ResultSet, ScoreDto, ScoreLineDto, TeamDto,
};
pub use query::MatchQuery;
