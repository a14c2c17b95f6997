//! Consumers of the fixtures layer

pub mod favorites;
pub mod matches_list;

pub use favorites::{FavoriteLeague, FavoritesStore, InMemoryFavorites};
pub use matches_list::{MatchListMode, MatchesListModel};
