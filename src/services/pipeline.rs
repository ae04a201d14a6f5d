use std::cmp::Reverse;

use crate::models::{Entry, QueryPage, SortKey, ViewState, DEFAULT_PAGE_SIZE};

/// Pure filter → sort → paginate over the collection held by the view.
/// Recomputed in full on every toolbar change; no state of its own.
pub fn run(entries: &[Entry], view: &ViewState) -> QueryPage {
    let mut result = filter(entries, view);
    sort(&mut result, view.sort);
    let total = result.len();

    match view.page {
        None => QueryPage {
            entries: result,
            total,
            total_pages: 1,
            page: 1,
        },
        Some(requested) => {
            let page_size = view.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
            let total_pages = total.div_ceil(page_size).max(1);
            let page = requested.clamp(1, total_pages);
            let entries = result
                .into_iter()
                .skip((page - 1) * page_size)
                .take(page_size)
                .collect();
            QueryPage {
                entries,
                total,
                total_pages,
                page,
            }
        }
    }
}

/// Keeps an entry only when every active filter agrees: category, rating,
/// required tags and the search term are ANDed, never ORed.
pub fn filter(entries: &[Entry], view: &ViewState) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| matches(entry, view))
        .cloned()
        .collect()
}

pub fn matches(entry: &Entry, view: &ViewState) -> bool {
    let category_ok = view.category.map_or(true, |c| entry.category == c);
    let rating_ok = view.rating.map_or(true, |r| entry.rating == r);
    let tags_ok = view
        .tags
        .iter()
        .all(|wanted| entry.tags.iter().any(|tag| tag == wanted));
    category_ok && rating_ok && tags_ok && matches_search(entry, &view.search)
}

/// Case-insensitive substring match over title, author, note and tags.
/// A missing note never matches.
fn matches_search(entry: &Entry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    entry.title.to_lowercase().contains(&needle)
        || entry.author.to_lowercase().contains(&needle)
        || entry
            .note
            .as_deref()
            .is_some_and(|note| note.to_lowercase().contains(&needle))
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Stable sort: entries that compare equal keep their relative order from
/// the store, for rating ties as well as date ties.
pub fn sort(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::DateDesc => entries.sort_by_key(|e| Reverse(e.created_at)),
        SortKey::DateAsc => entries.sort_by_key(|e| e.created_at),
        SortKey::RatingDesc => entries.sort_by_key(|e| Reverse(e.rating.weight())),
        SortKey::RatingAsc => entries.sort_by_key(|e| e.rating.weight()),
    }
}
