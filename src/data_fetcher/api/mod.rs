pub mod client;
pub mod http_client;
pub mod urls;
mod fetch_utils;

pub use client::{FootballApi, HttpFootballApi};
pub use http_client::create_http_client_with_timeout;
pub use urls::{build_api_url, build_matches_endpoint};
