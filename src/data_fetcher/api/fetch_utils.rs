//! Generic HTTP fetching with status and decode error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and decodes the JSON body into `T`.
///
/// No retries happen here. Transport failures become `NetworkTimeout`,
/// `NetworkConnection` or `ApiFetch`; non-success statuses map to the HTTP
/// status variants; undecodable bodies become `ApiNoData`,
/// `ApiMalformedJson` or `ApiUnexpectedStructure`.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    decode_body(&response_text, url)
}

/// Decodes a response body, telling apart empty bodies, non-JSON bodies and
/// JSON of the wrong shape.
pub(super) fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            debug!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::MatchesResponse;

    #[test]
    fn test_decode_body_classification() {
        let url = "http://localhost/matches";

        let empty = decode_body::<MatchesResponse>("   ", url).unwrap_err();
        assert!(matches!(empty, AppError::ApiNoData { .. }));

        let html = decode_body::<MatchesResponse>("<html>oops</html>", url).unwrap_err();
        assert!(matches!(html, AppError::ApiMalformedJson { .. }));

        let wrong_shape = decode_body::<MatchesResponse>(r#"{"games": []}"#, url).unwrap_err();
        assert!(matches!(wrong_shape, AppError::ApiUnexpectedStructure { .. }));

        let ok = decode_body::<MatchesResponse>(r#"{"matches": []}"#, url).unwrap();
        assert!(ok.matches.is_empty());
    }
}
