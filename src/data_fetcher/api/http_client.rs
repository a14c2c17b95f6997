//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

use crate::constants::{API_TOKEN_HEADER, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::error::AppError;

/// Creates an HTTP client with a request timeout, connection pooling and,
/// when a token is given, the `X-Auth-Token` header on every request.
///
/// # Errors
/// * `AppError::Config` - the token contains characters not allowed in a header
/// * `AppError::ApiFetch` - the underlying client could not be built
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    api_token: Option<&str>,
) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = api_token {
        let mut value = HeaderValue::from_str(token)
            .map_err(|e| AppError::config_error(format!("Invalid API token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(API_TOKEN_HEADER, value);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Creates an HTTP client for testing with default timeout and no token
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS, None)
        .expect("Failed to create test HTTP client")
}
