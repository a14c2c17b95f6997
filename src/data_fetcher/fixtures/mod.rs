mod core;
pub mod queries;

pub use self::core::FixturesService;
pub use queries::{recent_window, today_window, upcoming_window};
