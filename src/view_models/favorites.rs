use serde::{Deserialize, Serialize};

/// A league the user marked as favorite
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteLeague {
    pub id: String,
    pub name: String,
}

/// Source of the user's favorite leagues. Persistence is up to the implementor.
pub trait FavoritesStore: Send + Sync {
    fn favorite_leagues(&self) -> Vec<FavoriteLeague>;
}

/// Fixed favorites list, e.g. from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    leagues: Vec<FavoriteLeague>,
}

impl InMemoryFavorites {
    pub fn new(leagues: Vec<FavoriteLeague>) -> Self {
        Self { leagues }
    }

    /// Favorites known only by id; the id doubles as the display name.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let leagues = ids
            .into_iter()
            .map(Into::<String>::into)
            .filter(|id| !id.trim().is_empty())
            .map(|id| FavoriteLeague {
                name: id.clone(),
                id,
            })
            .collect();
        Self { leagues }
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn favorite_leagues(&self) -> Vec<FavoriteLeague> {
        self.leagues.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_skips_blank_entries() {
        let store = InMemoryFavorites::from_ids(["PL", " ", "CL"]);
        let ids: Vec<String> = store.favorite_leagues().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["PL", "CL"]);
    }

    #[test]
    fn test_new_keeps_names() {
        let store = InMemoryFavorites::new(vec![FavoriteLeague {
            id: "2021".to_string(),
            name: "Premier League".to_string(),
        }]);
        assert_eq!(store.favorite_leagues()[0].name, "Premier League");
    }
}
