use serde::{Deserialize, Serialize};

/// Personal standing of a work. The weight gives the total order used by
/// rating sorts and nothing else. A row whose stored rating is outside the
/// five known values lands in `Unrated` (weight 0, default style) instead
/// of failing the whole list; `Unrated` is never offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "聖經")]
    Bible,
    #[serde(rename = "極品")]
    TopTier,
    #[serde(rename = "頂級")]
    Destiny,
    #[serde(rename = "普通")]
    Ordinary,
    #[serde(rename = "神秘")]
    Mysterious,
    #[serde(rename = "未知", other)]
    Unrated,
}

impl Rating {
    /// The assignable ratings, in standing order. `Unrated` is read-side
    /// only and excluded on purpose.
    pub const ALL: [Rating; 5] = [
        Rating::Bible,
        Rating::TopTier,
        Rating::Destiny,
        Rating::Ordinary,
        Rating::Mysterious,
    ];

    /// Sort weight, highest standing first; unrated rows sink below
    /// everything known.
    pub fn weight(&self) -> u8 {
        match self {
            Rating::Bible => 5,
            Rating::TopTier => 4,
            Rating::Destiny => 3,
            Rating::Ordinary => 2,
            Rating::Mysterious => 1,
            Rating::Unrated => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Bible => "聖經",
            Rating::TopTier => "極品",
            Rating::Destiny => "頂級",
            Rating::Ordinary => "普通",
            Rating::Mysterious => "神秘",
            Rating::Unrated => "未知",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Rating::Bible => "👑",
            Rating::TopTier => "🌹",
            Rating::Destiny => "✨",
            Rating::Ordinary => "☕",
            Rating::Mysterious => "🔮",
            Rating::Unrated => "❔",
        }
    }

    /// Badge classes for the rating pill on each card.
    pub fn style(&self) -> &'static str {
        match self {
            Rating::Bible => "bg-amber-50 text-amber-700 border-amber-200",
            Rating::TopTier => "bg-rose-50 text-rose-700 border-rose-200",
            Rating::Destiny => "bg-blue-50 text-blue-700 border-blue-200",
            Rating::Ordinary => "bg-stone-50 text-stone-700 border-stone-200",
            Rating::Mysterious => "bg-purple-50 text-purple-700 border-purple-200",
            Rating::Unrated => "bg-stone-50 text-stone-700 border-stone-200",
        }
    }
}
