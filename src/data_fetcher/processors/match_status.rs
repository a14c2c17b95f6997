use crate::data_fetcher::models::MatchStatus;

/// Maps an upstream status string onto [`MatchStatus`].
///
/// Unrecognized values (`TIMED`, `SUSPENDED`, `AWARDED`, anything added
/// upstream later) are treated as scheduled.
///
/// # Examples
///
/// ```rust
/// use bsports::data_fetcher::models::MatchStatus;
/// use bsports::data_fetcher::processors::map_match_status;
///
/// assert_eq!(map_match_status("IN_PLAY"), MatchStatus::Live);
/// assert_eq!(map_match_status("ABANDONED"), MatchStatus::Scheduled);
/// ```
pub fn map_match_status(upstream: &str) -> MatchStatus {
    match upstream {
        "SCHEDULED" => MatchStatus::Scheduled,
        "LIVE" | "IN_PLAY" => MatchStatus::Live,
        "PAUSED" => MatchStatus::Paused,
        "FINISHED" => MatchStatus::Finished,
        "POSTPONED" => MatchStatus::Postponed,
        "CANCELLED" => MatchStatus::Cancelled,
        other => {
            tracing::debug!("Unrecognized match status '{other}', treating as scheduled");
            MatchStatus::Scheduled
        }
    }
}
