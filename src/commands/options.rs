use serde::Serialize;

use crate::models::{Category, Rating};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub id: Category,
    pub label: &'static str,
    pub code: &'static str,
    pub style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingOption {
    pub id: Rating,
    pub label: &'static str,
    pub icon: &'static str,
    pub style: &'static str,
    pub weight: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogOptions {
    pub categories: Vec<CategoryOption>,
    pub ratings: Vec<RatingOption>,
}

/// Toolbar and card-styling lookups, derived from the closed enums so the
/// lists stay in step with the variants.
#[tauri::command]
pub async fn catalog_options() -> Result<CatalogOptions, String> {
    Ok(CatalogOptions {
        categories: Category::ALL
            .into_iter()
            .map(|category| CategoryOption {
                id: category,
                label: category.label(),
                code: category.display_code(),
                style: category.style(),
            })
            .collect(),
        ratings: Rating::ALL
            .into_iter()
            .map(|rating| RatingOption {
                id: rating,
                label: rating.label(),
                icon: rating.icon(),
                style: rating.style(),
                weight: rating.weight(),
            })
            .collect(),
    })
}
