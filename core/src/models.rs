use serde::{Deserialize, Serialize};

/// Query sent to the remote service when the caller provides no usable
/// search term.
pub const MATCH_ALL_QUERY: &str = "all";

/// A recipe as returned by a search query.
///
/// Read-only projection of a remote hit; never persisted directly. A recipe
/// is "favorited" iff its `uri` appears in the favorites collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub uri: String,
    pub label: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_lines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<Vec<String>>,
}

/// A favorited recipe as persisted in the store.
///
/// `uri` is the dedup key: the store holds at most one record per uri.
/// The display texts are precomputed at save time so the favorites list
/// renders without refetching the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub uri: String,
    pub label: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "ingredientsText")]
    pub ingredients_text: String,
    #[serde(rename = "nutritionText")]
    pub nutrition_text: String,
}

impl FavoriteRecord {
    #[must_use]
    pub fn from_summary(recipe: &RecipeSummary) -> Self {
        Self {
            uri: recipe.uri.clone(),
            label: recipe.label.clone(),
            image_url: recipe.image.clone(),
            ingredients_text: ingredients_text(recipe),
            nutrition_text: nutrition_text(recipe),
        }
    }
}

/// Normalize a free-text query: empty or whitespace-only input becomes the
/// match-all sentinel.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        MATCH_ALL_QUERY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Bulleted ingredient list for display, with a count header.
#[must_use]
pub fn ingredients_text(recipe: &RecipeSummary) -> String {
    match recipe.ingredient_lines.as_deref() {
        Some(lines) if !lines.is_empty() => {
            let list = lines
                .iter()
                .map(|l| format!("• {l}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Ingredients ({}):\n\n{list}", lines.len())
        }
        _ => "No ingredients available.".to_string(),
    }
}

/// Bulleted nutrition facts for display. Absent fields are omitted; a zero
/// total time renders as "Time not available".
#[must_use]
pub fn nutrition_text(recipe: &RecipeSummary) -> String {
    use std::fmt::Write;

    let mut info = String::from("Nutrition Info:\n\n");
    if let Some(cal) = recipe.calories {
        let _ = writeln!(info, "• Calories: {cal:.0} kcal");
    }
    if let Some(servings) = recipe.servings {
        let _ = writeln!(info, "• Servings: {}", servings as i64);
    }
    if let Some(time) = recipe.total_time {
        if time > 0.0 {
            let _ = write!(info, "• Total Time: {} min", time as i64);
        } else {
            let _ = write!(info, "• Time not available");
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RecipeSummary {
        RecipeSummary {
            uri: "http://www.edamam.com/ontologies/edamam.owl#recipe_1".to_string(),
            label: "Chicken Soup".to_string(),
            image: "https://img.example.com/soup.jpg".to_string(),
            url: Some("https://example.com/soup".to_string()),
            ingredient_lines: Some(vec![
                "1 whole chicken".to_string(),
                "2 carrots, chopped".to_string(),
            ]),
            calories: Some(1523.7),
            servings: Some(4.0),
            total_time: Some(90.0),
            cuisine_type: Some(vec!["american".to_string()]),
            meal_type: Some(vec!["lunch/dinner".to_string()]),
            dish_type: Some(vec!["soup".to_string()]),
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("soup"), "soup");
        assert_eq!(normalize_query("  soup  "), "soup");
        assert_eq!(normalize_query(""), MATCH_ALL_QUERY);
        assert_eq!(normalize_query("   \t "), MATCH_ALL_QUERY);
    }

    #[test]
    fn test_ingredients_text() {
        let text = ingredients_text(&sample_summary());
        assert!(text.starts_with("Ingredients (2):\n\n"));
        assert!(text.contains("• 1 whole chicken"));
        assert!(text.contains("• 2 carrots, chopped"));
    }

    #[test]
    fn test_ingredients_text_missing() {
        let mut recipe = sample_summary();
        recipe.ingredient_lines = None;
        assert_eq!(ingredients_text(&recipe), "No ingredients available.");

        recipe.ingredient_lines = Some(vec![]);
        assert_eq!(ingredients_text(&recipe), "No ingredients available.");
    }

    #[test]
    fn test_nutrition_text() {
        let text = nutrition_text(&sample_summary());
        assert!(text.starts_with("Nutrition Info:\n\n"));
        assert!(text.contains("• Calories: 1524 kcal"));
        assert!(text.contains("• Servings: 4"));
        assert!(text.contains("• Total Time: 90 min"));
    }

    #[test]
    fn test_nutrition_text_zero_time() {
        let mut recipe = sample_summary();
        recipe.total_time = Some(0.0);
        let text = nutrition_text(&recipe);
        assert!(text.contains("• Time not available"));
        assert!(!text.contains("min"));
    }

    #[test]
    fn test_nutrition_text_all_absent() {
        let mut recipe = sample_summary();
        recipe.calories = None;
        recipe.servings = None;
        recipe.total_time = None;
        assert_eq!(nutrition_text(&recipe), "Nutrition Info:\n\n");
    }

    #[test]
    fn test_favorite_from_summary() {
        let recipe = sample_summary();
        let fav = FavoriteRecord::from_summary(&recipe);
        assert_eq!(fav.uri, recipe.uri);
        assert_eq!(fav.label, "Chicken Soup");
        assert_eq!(fav.image_url, recipe.image);
        assert!(fav.ingredients_text.starts_with("Ingredients (2):"));
        assert!(fav.nutrition_text.contains("• Calories: 1524 kcal"));
    }

    #[test]
    fn test_favorite_record_json_field_names() {
        let fav = FavoriteRecord::from_summary(&sample_summary());
        let json = serde_json::to_string(&fav).unwrap();
        // Persisted blob keeps the historical field names
        assert!(json.contains("\"imageURL\""));
        assert!(json.contains("\"ingredientsText\""));
        assert!(json.contains("\"nutritionText\""));

        let back: FavoriteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fav);
    }
}
