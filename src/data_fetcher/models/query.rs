use chrono::NaiveDate;

/// Filters for a fixtures lookup.
///
/// League ids keep the caller's order with duplicates removed (first
/// occurrence wins), which keeps the derived endpoint canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    league_ids: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl MatchQuery {
    pub fn new(
        league_ids: Option<&[String]>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for id in league_ids.unwrap_or_default() {
            if !unique.contains(id) {
                unique.push(id.clone());
            }
        }

        Self {
            league_ids: unique,
            date_from,
            date_to,
        }
    }

    pub fn league_ids(&self) -> &[String] {
        &self.league_ids
    }
}
