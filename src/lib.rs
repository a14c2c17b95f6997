//! Football fixtures retrieval with a short-lived query cache
//!
//! This library fetches match listings from the football-data.org v4 API,
//! normalizes them into [`Match`] records and caches each query result for a
//! few minutes so repeated lookups don't hit the network.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bsports::config::Config;
//! use bsports::data_fetcher::{FixturesService, HttpFootballApi, SystemClock};
//! use bsports::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = HttpFootballApi::from_config(&config)?;
//!     let service = FixturesService::new(Arc::new(api), Arc::new(SystemClock), config.cache_ttl());
//!
//!     let leagues = vec!["PL".to_string()];
//!     for m in service.fetch_upcoming_matches(Some(&leagues)).await?.iter() {
//!         println!("{} {} {}", m.home_team_name, m.score_display(), m.away_team_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod testing_utils;
pub mod view_models;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    CacheStats, Clock, FixturesService, FootballApi, HttpFootballApi, Match, MatchList,
    MatchScore, MatchStatus, SystemClock,
};
pub use error::AppError;
pub use view_models::{FavoriteLeague, FavoritesStore, MatchListMode, MatchesListModel};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
