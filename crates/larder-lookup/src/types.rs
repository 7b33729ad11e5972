//! Public lookup result shapes
//!
//! Records are what gets cached, so every struct carries `#[serde(default)]`:
//! entries written by an older record shape still decode, with defaults for
//! fields they lack.

use serde::{Deserialize, Serialize};

/// Envelope returned by every lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult<T> {
    pub results: T,
    pub total_results: u64,
    /// `true` when served from the cache without a provider call
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,
}

/// What a cache entry's payload holds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CachedResults<T> {
    pub results: T,
    #[serde(default)]
    pub total_results: u64,
}

/// Cache counters since process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Failed reads/writes that were degraded to a miss or skipped
    pub store_errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientSummary {
    pub id: i64,
    pub name: String,
    /// Provider image file name
    pub image: Option<String>,
    /// Full CDN URL for `image`
    pub image_url: Option<String>,
    pub aisle: Option<String>,
    pub possible_units: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientInfo {
    pub id: i64,
    pub name: String,
    pub original: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub possible_units: Vec<String>,
    pub shopping_list_units: Vec<String>,
    pub aisle: Option<String>,
    pub consistency: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub category_path: Vec<String>,
    pub estimated_cost: Option<Quantity>,
    pub nutrients: Vec<NutrientAmount>,
    pub caloric_breakdown: Option<CaloricSplit>,
    pub weight_per_serving: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantity {
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NutrientAmount {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub percent_of_daily_needs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaloricSplit {
    pub percent_protein: Option<f64>,
    pub percent_fat: Option<f64>,
    pub percent_carbs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroceryProduct {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroceryProductDetail {
    pub id: i64,
    pub title: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub badges: Vec<String>,
    pub breadcrumbs: Vec<String>,
    pub aisle: Option<String>,
    pub ingredient_count: Option<u32>,
    pub ingredient_list: Option<String>,
    /// US cents
    pub price: Option<f64>,
    pub servings: Option<ServingSize>,
    pub upc: Option<String>,
    pub nutrients: Vec<NutrientAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServingSize {
    pub number: Option<f64>,
    pub size: Option<f64>,
    pub unit: Option<String>,
}

/// One input ingredient and the products it maps to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientMapping {
    pub original: String,
    pub original_name: Option<String>,
    pub ingredient_image: Option<String>,
    pub meta: Vec<String>,
    pub products: Vec<MappedGroceryProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappedGroceryProduct {
    pub id: i64,
    pub title: String,
    pub upc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<u32>,
    pub ready_in_minutes: Option<u32>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub cuisines: Vec<String>,
    pub dish_types: Vec<String>,
    pub diets: Vec<String>,
    pub vegetarian: Option<bool>,
    pub vegan: Option<bool>,
    pub gluten_free: Option<bool>,
    pub dairy_free: Option<bool>,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub nutrients: Vec<NutrientAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub original: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub aisle: Option<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_result_wire_shape() {
        let result = LookupResult {
            results: vec![GroceryProduct {
                id: 1,
                title: "Whole Milk".to_string(),
                image: None,
            }],
            total_results: 1,
            cached: false,
            cache_key: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "results": [{ "id": 1, "title": "Whole Milk", "image": null }],
                "totalResults": 1,
                "cached": false
            })
        );
    }

    #[test]
    fn test_older_cached_shape_rehydrates_with_defaults() {
        // Written before `imageUrl`, `aisle` and `possibleUnits` existed
        let old = serde_json::json!({
            "results": [{ "id": 9003, "name": "apple", "image": "apple.jpg" }],
            "totalResults": 1
        });
        let cached: CachedResults<Vec<IngredientSummary>> = serde_json::from_value(old).unwrap();
        let apple = &cached.results[0];
        assert_eq!(apple.id, 9003);
        assert!(apple.image_url.is_none());
        assert!(apple.possible_units.is_empty());
    }

    #[test]
    fn test_cached_results_missing_total_defaults_to_zero() {
        let cached: CachedResults<Vec<RecipeSummary>> =
            serde_json::from_value(serde_json::json!({ "results": [] })).unwrap();
        assert_eq!(cached.total_results, 0);
    }
}
