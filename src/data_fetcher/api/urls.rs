//! Endpoint and URL building for the football-data API

use crate::constants::endpoints::{DATE_FORMAT, MATCHES};
use crate::data_fetcher::models::MatchQuery;

/// Builds the relative endpoint for a match listing.
///
/// The returned string doubles as the fixtures cache key: identical filters
/// always produce the identical string, and any difference in league ids,
/// `dateFrom` or `dateTo` produces a different one. Keep the term order and
/// the date format stable, otherwise cached entries silently stop matching.
///
/// # Example
/// ```
/// use bsports::data_fetcher::api::build_matches_endpoint;
/// use bsports::data_fetcher::models::MatchQuery;
/// use chrono::NaiveDate;
///
/// let leagues = vec!["PL".to_string(), "CL".to_string()];
/// let query = MatchQuery::new(
///     Some(&leagues),
///     NaiveDate::from_ymd_opt(2024, 3, 10),
///     NaiveDate::from_ymd_opt(2024, 3, 17),
/// );
/// assert_eq!(
///     build_matches_endpoint(&query),
///     "matches?competitions=PL,CL&dateFrom=2024-03-10&dateTo=2024-03-17"
/// );
/// ```
pub fn build_matches_endpoint(query: &MatchQuery) -> String {
    let mut params: Vec<String> = Vec::new();

    if !query.league_ids().is_empty() {
        params.push(format!("competitions={}", query.league_ids().join(",")));
    }

    if let Some(date_from) = query.date_from {
        params.push(format!("dateFrom={}", date_from.format(DATE_FORMAT)));
    }

    if let Some(date_to) = query.date_to {
        params.push(format!("dateTo={}", date_to.format(DATE_FORMAT)));
    }

    if params.is_empty() {
        MATCHES.to_string()
    } else {
        format!("{MATCHES}?{}", params.join("&"))
    }
}

/// Joins the API base URL and a relative endpoint with exactly one `/`.
///
/// # Example
/// ```
/// use bsports::data_fetcher::api::build_api_url;
///
/// let url = build_api_url("https://api.football-data.org/v4/", "matches?dateFrom=2024-03-10");
/// assert_eq!(url, "https://api.football-data.org/v4/matches?dateFrom=2024-03-10");
/// ```
pub fn build_api_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
