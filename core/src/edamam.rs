use serde::Deserialize;

use crate::models::RecipeSummary;

/// Envelope returned by the Edamam recipe search v2 endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    pub recipe: RecipeData,
}

/// Raw recipe payload as the API sends it. Everything is optional here;
/// `recipe_to_summary` decides what makes a usable record.
#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub uri: Option<String>,
    pub label: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "ingredientLines")]
    pub ingredient_lines: Option<Vec<String>>,
    pub calories: Option<f64>,
    #[serde(rename = "yield")]
    pub servings: Option<f64>,
    #[serde(rename = "totalTime")]
    pub total_time: Option<f64>,
    #[serde(rename = "cuisineType")]
    pub cuisine_type: Option<Vec<String>>,
    #[serde(rename = "mealType")]
    pub meal_type: Option<Vec<String>>,
    #[serde(rename = "dishType")]
    pub dish_type: Option<Vec<String>>,
}

/// Convert a raw hit into a `RecipeSummary`. A record without a uri, label,
/// or image is dropped rather than failing the whole envelope.
#[must_use]
pub fn recipe_to_summary(r: RecipeData) -> Option<RecipeSummary> {
    let uri = r.uri.filter(|u| !u.is_empty())?;
    let label = r.label.filter(|l| !l.is_empty())?;
    let image = r.image.filter(|i| !i.is_empty())?;

    Some(RecipeSummary {
        uri,
        label,
        image,
        url: r.url,
        ingredient_lines: r.ingredient_lines,
        calories: r.calories,
        servings: r.servings,
        total_time: r.total_time,
        cuisine_type: r.cuisine_type,
        meal_type: r.meal_type,
        dish_type: r.dish_type,
    })
}
