use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_api_url;
use crate::config::{Config, normalize_base_url};
use crate::data_fetcher::models::MatchesResponse;
use crate::error::AppError;

/// Upstream data source for match listings.
///
/// `endpoint` is relative to the API root, e.g.
/// `matches?competitions=PL&dateFrom=2024-03-10`.
#[async_trait]
pub trait FootballApi: Send + Sync {
    async fn fetch_matches(&self, endpoint: &str) -> Result<MatchesResponse, AppError>;
}

/// [`FootballApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpFootballApi {
    client: Client,
    base_url: String,
}

impl HttpFootballApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Builds the HTTP client from the configured timeout and token.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(
            config.http_timeout_seconds,
            config.api_token.as_deref(),
        )?;
        Ok(Self::new(client, config.api_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FootballApi for HttpFootballApi {
    #[instrument(skip(self))]
    async fn fetch_matches(&self, endpoint: &str) -> Result<MatchesResponse, AppError> {
        let url = build_api_url(&self.base_url, endpoint);
        fetch::<MatchesResponse>(&self.client, &url).await
    }
}
