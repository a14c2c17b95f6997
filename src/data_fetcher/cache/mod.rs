pub mod types;
mod core;

pub use self::core::{CacheStats, FixturesCache};
pub use types::{CachedMatches, MatchList};
