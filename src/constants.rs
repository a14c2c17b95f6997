//! Application-wide constants and configuration values
//!
//! Centralizes the magic numbers used by the fixtures layer, the HTTP client
//! and the configuration defaults.

/// Default upstream API root (football-data.org v4)
pub const DEFAULT_API_BASE_URL: &str = "https://api.football-data.org/v4";

/// Header carrying the football-data.org API token
pub const API_TOKEN_HEADER: &str = "X-Auth-Token";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for fixture query results (5 minutes)
    pub const FIXTURES_SECONDS: u64 = 300;
}

/// Date windows used by the convenience queries, in days
pub mod windows {
    /// Length of the "today" window
    pub const TODAY_DAYS: u64 = 1;

    /// How far ahead the upcoming query looks
    pub const UPCOMING_DAYS: u64 = 7;

    /// How far back the recent query looks
    pub const RECENT_DAYS: u64 = 7;
}

/// Upstream endpoint building blocks
pub mod endpoints {
    /// Resource path for match listings
    pub const MATCHES: &str = "matches";

    /// Calendar date format for `dateFrom` / `dateTo`
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_URL: &str = "BSPORTS_API_URL";

    /// Environment variable for API token override
    pub const API_TOKEN: &str = "BSPORTS_API_TOKEN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "BSPORTS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "BSPORTS_HTTP_TIMEOUT";

    /// Environment variable for fixtures cache TTL override in seconds
    pub const CACHE_TTL: &str = "BSPORTS_CACHE_TTL";
}

/// Log file defaults
pub mod logging {
    /// Default log file name inside the log directory
    pub const LOG_FILE_NAME: &str = "bsports.log";

    /// Default tracing directive for this crate
    pub const DEFAULT_DIRECTIVE: &str = "bsports=info";
}
