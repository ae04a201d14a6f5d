use serde::{Deserialize, Serialize};

use super::{Category, Rating};
use crate::utils::tags::parse_tags;

/// Cover used when a draft arrives without one.
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?auto=format&fit=crop&q=80&w=200&h=300";

/// One catalogued work, exactly as stored in the `collection` table.
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plurk_url: Option<String>,
    pub created_at: i64,
}

/// What the registration form submits for a new work. Tags arrive as the raw
/// free-text field and are split when the store payload is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub rating: Rating,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub plurk_url: String,
}

impl EntryDraft {
    /// Store payload for a create. `id` and `createdAt` are absent by
    /// construction; the store assigns both. Blank optionals become NULL
    /// rather than empty strings, and a blank cover gets the placeholder.
    pub fn into_record(self) -> NewEntryRecord {
        NewEntryRecord {
            title: self.title,
            author: self.author,
            category: self.category,
            rating: self.rating,
            cover_url: if self.cover_url.trim().is_empty() {
                DEFAULT_COVER_URL.to_string()
            } else {
                self.cover_url
            },
            note: non_blank(self.note),
            tags: parse_tags(&self.tags),
            plurk_url: non_blank(self.plurk_url),
        }
    }
}

/// Wire shape of a create, sent as-is to the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntryRecord {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub rating: Rating,
    pub cover_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plurk_url: Option<String>,
}

/// Fields an edit may change. Anything left as `None` keeps its stored
/// value. `id` and `createdAt` cannot be expressed here at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    pub rating: Option<Rating>,
    pub cover_url: Option<String>,
    pub note: Option<String>,
    pub tags: Option<String>,
    pub plurk_url: Option<String>,
}

impl EntryPatch {
    /// Wire shape of the edit: only the fields actually being changed.
    pub fn into_changes(self) -> EntryChanges {
        EntryChanges {
            title: self.title,
            author: self.author,
            category: self.category,
            rating: self.rating,
            cover_url: self.cover_url,
            note: self.note,
            tags: self.tags.as_deref().map(parse_tags),
            plurk_url: self.plurk_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plurk_url: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Illustrative shelf shown when the store has no rows yet. Never written
/// back anywhere.
pub fn sample_entries() -> Vec<Entry> {
    let now = chrono::Utc::now().timestamp_millis();
    let day = 86_400_000;
    let sample = |id: &str,
                  title: &str,
                  author: &str,
                  category: Category,
                  rating: Rating,
                  note: &str,
                  tags: &[&str],
                  created_at: i64| Entry {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        category,
        rating,
        cover_url: Some(DEFAULT_COVER_URL.to_string()),
        note: Some(note.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        plurk_url: None,
        created_at,
    };

    vec![
        sample(
            "sample-1",
            "終將成為妳",
            "仲谷鳰",
            Category::Manga,
            Rating::Bible,
            "某種神的旨意。",
            &["校園", "百合"],
            now - 3 * day,
        ),
        sample(
            "sample-2",
            "青い花",
            "志村貴子",
            Category::Manga,
            Rating::TopTier,
            "溫柔而疼痛。",
            &["青春"],
            now - 2 * day,
        ),
        sample(
            "sample-3",
            "安達與島村",
            "入間人間",
            Category::Novel,
            Rating::Destiny,
            "日常的重量。",
            &["日常"],
            now - day,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft {
            title: "終將成為妳".to_string(),
            author: "仲谷鳰".to_string(),
            category: Category::Manga,
            rating: Rating::Bible,
            cover_url: String::new(),
            note: String::new(),
            tags: "校園, 百合 胃痛".to_string(),
            plurk_url: String::new(),
        }
    }

    #[test]
    fn create_payload_never_carries_id_or_created_at() {
        let value = serde_json::to_value(draft().into_record()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("createdAt"));
    }

    #[test]
    fn blank_cover_gets_the_placeholder() {
        let record = draft().into_record();
        assert_eq!(record.cover_url, DEFAULT_COVER_URL);
    }

    #[test]
    fn blank_optionals_become_null_not_empty_strings() {
        let record = draft().into_record();
        assert!(record.note.is_none());
        assert!(record.plurk_url.is_none());
    }

    #[test]
    fn raw_tag_field_is_split_into_clean_tags() {
        let record = draft().into_record();
        assert_eq!(record.tags, vec!["校園", "百合", "胃痛"]);
    }

    #[test]
    fn patch_serializes_only_the_changed_fields() {
        let patch = EntryPatch {
            rating: Some(Rating::TopTier),
            note: Some("再讀一次還是很好".to_string()),
            ..EntryPatch::default()
        };
        let value = serde_json::to_value(patch.into_changes()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("rating"));
        assert!(object.contains_key("note"));
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("createdAt"));
    }

    #[test]
    fn entry_uses_the_stored_column_names() {
        let entry = sample_entries().remove(0);
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("coverUrl"));
        assert!(object.contains_key("createdAt"));
        assert!(!object.contains_key("cover_url"));
    }

    #[test]
    fn stored_row_without_optionals_still_parses() {
        let row = r#"{
            "id": "41",
            "title": "Carol",
            "author": "Todd Haynes",
            "category": "電影",
            "rating": "極品",
            "createdAt": 1700000000000
        }"#;
        let entry: Entry = serde_json::from_str(row).unwrap();
        assert!(entry.note.is_none());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn one_foreign_row_does_not_fail_the_whole_list() {
        let rows = r#"[
            {
                "id": "1",
                "title": "終將成為妳",
                "author": "仲谷鳰",
                "category": "漫畫",
                "rating": "聖經",
                "createdAt": 1700000000000
            },
            {
                "id": "2",
                "title": "某部奇怪的東西",
                "author": "不明",
                "category": "有聲書",
                "rating": "有趣",
                "createdAt": 1700000001000
            }
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(rows).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].category, Category::Other);
        assert_eq!(entries[1].rating, Rating::Unrated);
    }
}
