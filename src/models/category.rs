use serde::{Deserialize, Serialize};

/// Shelf categories. The store keeps the display string itself, so the wire
/// names are the Chinese labels. Anything a row carries outside the set
/// deserializes to `Other` instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "漫畫")]
    Manga,
    #[serde(rename = "小說")]
    Novel,
    #[serde(rename = "電影")]
    Movie,
    #[serde(rename = "動畫")]
    Animation,
    #[serde(rename = "遊戲")]
    Game,
    #[serde(rename = "劇集")]
    DramaSeries,
    #[serde(rename = "甲片")]
    Gay,
    #[serde(rename = "其他", other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Manga,
        Category::Novel,
        Category::Movie,
        Category::Animation,
        Category::Game,
        Category::DramaSeries,
        Category::Gay,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Manga => "漫畫",
            Category::Novel => "小說",
            Category::Movie => "電影",
            Category::Animation => "動畫",
            Category::Game => "遊戲",
            Category::DramaSeries => "劇集",
            Category::Gay => "甲片",
            Category::Other => "其他",
        }
    }

    /// Short English code shown in the card header.
    pub fn display_code(&self) -> &'static str {
        match self {
            Category::Manga => "MANGA",
            Category::Novel => "NOVEL",
            Category::Movie => "MOVIE",
            Category::Animation => "ANIME",
            Category::Game => "GAME",
            Category::DramaSeries => "DRAMA",
            Category::Gay => "GAY",
            Category::Other => "OTHER",
        }
    }

    /// Card accent classes; categories without a dedicated accent share the
    /// stone default.
    pub fn style(&self) -> &'static str {
        match self {
            Category::Manga => "text-blue-500 border-blue-200",
            Category::Novel => "text-emerald-500 border-emerald-200",
            _ => "text-stone-400 border-stone-200",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_value_is_the_stored_label() {
        let json = serde_json::to_string(&Category::Manga).unwrap();
        assert_eq!(json, "\"漫畫\"");
        let back: Category = serde_json::from_str("\"劇集\"").unwrap();
        assert_eq!(back, Category::DramaSeries);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_other() {
        let parsed: Category = serde_json::from_str("\"有聲書\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn styles_cover_every_category() {
        for category in Category::ALL {
            assert!(!category.style().is_empty());
            assert!(!category.display_code().is_empty());
        }
    }
}
