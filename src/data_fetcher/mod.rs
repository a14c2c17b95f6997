pub mod api;
pub mod cache;
pub mod clock;
pub mod fixtures;
pub mod models;
pub mod processors;

pub use api::{FootballApi, HttpFootballApi};
pub use cache::{CacheStats, MatchList};
pub use clock::{Clock, SystemClock};
pub use fixtures::FixturesService;
pub use models::{Match, MatchScore, MatchStatus};
