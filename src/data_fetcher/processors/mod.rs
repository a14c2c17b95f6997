pub mod match_mapping;
pub mod match_status;

pub use match_mapping::{convert_to_match, extract_season, parse_match_date};
pub use match_status::map_match_status;
