use serde::{Deserialize, Serialize};

use super::{Category, Entry, Rating};

/// Grid page length when the view asks for paging without a size.
pub const DEFAULT_PAGE_SIZE: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "date-asc")]
    DateAsc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
    #[serde(rename = "rating-asc")]
    RatingAsc,
}

/// Everything the toolbar can set, passed whole to the pipeline on every
/// interaction. `None` filters mean 全部. Paging is off unless `page` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub category: Option<Category>,
    pub rating: Option<Rating>,
    pub tags: Vec<String>,
    pub search: String,
    pub sort: SortKey,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// What the grid renders: the filtered, sorted, possibly paged slice plus
/// the counts the pager needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub entries: Vec<Entry>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Footer counts over the full unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub manga: usize,
    pub novel: usize,
    pub movie: usize,
}

impl CollectionStats {
    pub fn of(entries: &[Entry]) -> Self {
        let count = |category: Category| entries.iter().filter(|e| e.category == category).count();
        Self {
            total: entries.len(),
            manga: count(Category::Manga),
            novel: count(Category::Novel),
            movie: count(Category::Movie),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_state_filters_nothing() {
        let view = ViewState::default();
        assert!(view.category.is_none());
        assert!(view.rating.is_none());
        assert!(view.tags.is_empty());
        assert!(view.search.is_empty());
        assert_eq!(view.sort, SortKey::DateDesc);
        assert!(view.page.is_none());
    }

    #[test]
    fn sort_key_uses_the_toolbar_ids() {
        let parsed: SortKey = serde_json::from_str("\"rating-desc\"").unwrap();
        assert_eq!(parsed, SortKey::RatingDesc);
    }

    #[test]
    fn stats_count_the_footer_categories() {
        let entries = crate::models::sample_entries();
        let stats = CollectionStats::of(&entries);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.manga, 2);
        assert_eq!(stats.novel, 1);
        assert_eq!(stats.movie, 0);
    }
}
