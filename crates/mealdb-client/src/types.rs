//! Recipe and category wire types
//!
//! These structs mirror the JSON shapes served by TheMealDB. Field names on
//! the Rust side are mechanical conversions of the wire names, so serialized
//! values (including the persisted favorites blob) keep the service's own
//! vocabulary (`idMeal`, `strMeal`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many numbered ingredient/measure column pairs the service exposes
pub const INGREDIENT_SLOTS: usize = 20;

/// A minimal recipe as returned by the list and search endpoints
///
/// This is also the shape persisted for favorites: identifier, display name,
/// and thumbnail, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Service-assigned stable identifier
    #[serde(rename = "idMeal")]
    pub id_meal: String,

    /// Display name of the dish
    #[serde(rename = "strMeal")]
    pub str_meal: String,

    /// Thumbnail image URI
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: String,
}

impl MealSummary {
    /// Create a summary from its three fields
    pub fn new(
        id_meal: impl Into<String>,
        str_meal: impl Into<String>,
        str_meal_thumb: impl Into<String>,
    ) -> Self {
        Self {
            id_meal: id_meal.into(),
            str_meal: str_meal.into(),
            str_meal_thumb: str_meal_thumb.into(),
        }
    }
}

/// A full recipe as returned by the lookup endpoint
///
/// Beyond the summary fields, the service returns instructions plus twenty
/// numbered ingredient/measure column pairs and assorted metadata. Those
/// numbered columns are captured in [`MealDetail::extra`] and distilled by
/// [`MealDetail::ingredient_lines`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetail {
    /// Service-assigned stable identifier
    #[serde(rename = "idMeal")]
    pub id_meal: String,

    /// Display name of the dish
    #[serde(rename = "strMeal")]
    pub str_meal: String,

    /// Thumbnail image URI
    #[serde(rename = "strMealThumb", skip_serializing_if = "Option::is_none")]
    pub str_meal_thumb: Option<String>,

    /// Free-form preparation instructions
    #[serde(rename = "strInstructions", skip_serializing_if = "Option::is_none")]
    pub str_instructions: Option<String>,

    /// Remaining wire fields: `strIngredient1..20`, `strMeasure1..20`,
    /// `strCategory`, `strArea`, and whatever else the service adds
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MealDetail {
    /// Render the numbered ingredient columns as display lines
    ///
    /// Walks `strIngredient1..strIngredient20`, skipping blank or absent
    /// ingredients, and joins each with its measure as `"{measure} {name}"`
    /// (trimmed, measure optional). Column order is preserved.
    ///
    /// # Examples
    /// ```
    /// use mealdb_client::MealDetail;
    ///
    /// let detail: MealDetail = serde_json::from_value(serde_json::json!({
    ///     "idMeal": "52772",
    ///     "strMeal": "Teriyaki Chicken Casserole",
    ///     "strIngredient1": "soy sauce",
    ///     "strMeasure1": "3/4 cup",
    ///     "strIngredient2": "",
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(detail.ingredient_lines(), vec!["3/4 cup soy sauce"]);
    /// ```
    pub fn ingredient_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for i in 1..=INGREDIENT_SLOTS {
            let ingredient = self
                .extra
                .get(&format!("strIngredient{}", i))
                .and_then(|v| v.as_str())
                .filter(|s| !s.trim().is_empty());
            let Some(ingredient) = ingredient else {
                continue;
            };
            let measure = self
                .extra
                .get(&format!("strMeasure{}", i))
                .and_then(|v| v.as_str())
                .unwrap_or("");
            lines.push(format!("{} {}", measure, ingredient).trim().to_string());
        }
        lines
    }

    /// Reduce this detail back to the minimal list/persistence shape
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id_meal: self.id_meal.clone(),
            str_meal: self.str_meal.clone(),
            str_meal_thumb: self.str_meal_thumb.clone().unwrap_or_default(),
        }
    }
}

impl From<MealSummary> for MealDetail {
    /// Promote a minimal snapshot to a detail with no extended fields,
    /// the fallback shape when a full lookup is unavailable
    fn from(summary: MealSummary) -> Self {
        MealDetail {
            id_meal: summary.id_meal,
            str_meal: summary.str_meal,
            str_meal_thumb: Some(summary.str_meal_thumb),
            str_instructions: None,
            extra: HashMap::new(),
        }
    }
}

/// A recipe category as returned by the category listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Service-assigned identifier
    #[serde(rename = "idCategory")]
    pub id_category: String,

    /// Display name, also the filter key for the category endpoint
    #[serde(rename = "strCategory")]
    pub str_category: String,

    /// Thumbnail image URI
    #[serde(rename = "strCategoryThumb")]
    pub str_category_thumb: String,

    /// Free-form description
    #[serde(rename = "strCategoryDescription")]
    pub str_category_description: String,
}

/// Response envelope for the category listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Listed categories; an absent field reads as empty
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Response envelope for the meal list, search, and lookup endpoints
///
/// The service signals "no match" as `meals: null`, never as an empty array
/// or an error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsResponse<T> {
    /// Matched meals; `null` and absent both read as no matches
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_detail() -> MealDetail {
        serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350 degrees F.",
            "strIngredient1": "soy sauce",
            "strIngredient2": "water",
            "strIngredient3": "brown sugar",
            "strIngredient4": "",
            "strIngredient5": "   ",
            "strIngredient6": null,
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": null,
            "strMeasure4": "1 tbsp"
        }))
        .unwrap()
    }

    #[test]
    fn test_meal_summary_wire_names() {
        let summary = MealSummary::new("52772", "Teriyaki Chicken Casserole", "https://x/y.jpg");
        let encoded = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            encoded,
            json!({
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "https://x/y.jpg"
            })
        );

        let decoded: MealSummary = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, summary);
    }

    #[test]
    fn test_category_decode() {
        let category: Category = serde_json::from_value(json!({
            "idCategory": "8",
            "strCategory": "Seafood",
            "strCategoryThumb": "https://www.themealdb.com/images/category/seafood.png",
            "strCategoryDescription": "Seafood is any form of sea life regarded as food by humans."
        }))
        .unwrap();
        assert_eq!(category.id_category, "8");
        assert_eq!(category.str_category, "Seafood");
    }

    #[test]
    fn test_ingredient_lines_skip_blank_and_absent() {
        let detail = sample_detail();
        // slot 3 has a null measure, slots 4-6 have no usable ingredient
        assert_eq!(
            detail.ingredient_lines(),
            vec!["3/4 cup soy sauce", "1/2 cup water", "brown sugar"]
        );
    }

    #[test]
    fn test_ingredient_lines_empty_when_no_columns() {
        let detail: MealDetail = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Plain"
        }))
        .unwrap();
        assert!(detail.ingredient_lines().is_empty());
    }

    #[test]
    fn test_detail_from_summary_fallback() {
        let summary = MealSummary::new("52944", "Escovitch Fish", "https://x/fish.jpg");
        let detail = MealDetail::from(summary.clone());

        assert_eq!(detail.id_meal, "52944");
        assert_eq!(detail.str_meal, "Escovitch Fish");
        assert_eq!(detail.str_meal_thumb.as_deref(), Some("https://x/fish.jpg"));
        assert!(detail.str_instructions.is_none());
        assert!(detail.ingredient_lines().is_empty());
        assert_eq!(detail.summary(), summary);
    }

    #[test]
    fn test_detail_extra_carries_unmodeled_fields() {
        let detail = sample_detail();
        assert_eq!(
            detail.extra.get("strArea").and_then(|v| v.as_str()),
            Some("Japanese")
        );
    }

    #[test]
    fn test_meals_response_null_and_absent() {
        let null_case: MealsResponse<MealSummary> =
            serde_json::from_value(json!({ "meals": null })).unwrap();
        assert!(null_case.meals.is_none());

        let absent_case: MealsResponse<MealSummary> = serde_json::from_value(json!({})).unwrap();
        assert!(absent_case.meals.is_none());

        let listed: MealsResponse<MealSummary> = serde_json::from_value(json!({
            "meals": [{ "idMeal": "1", "strMeal": "A", "strMealThumb": "https://x/a.jpg" }]
        }))
        .unwrap();
        assert_eq!(listed.meals.unwrap().len(), 1);
    }

    #[test]
    fn test_categories_response_absent_field() {
        let empty: CategoriesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.categories.is_empty());
    }
}
