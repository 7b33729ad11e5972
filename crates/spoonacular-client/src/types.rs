//! Raw Spoonacular response types
//!
//! These mirror the provider payloads with every field optional. Decoding
//! never fails on a missing or wrong-typed field (see [`crate::lenient`]);
//! callers decide which fields are required.

use serde::Deserialize;

use crate::lenient;

/// `GET /food/ingredients/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSearchResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub results: Vec<IngredientHit>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub number: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_results: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientHit {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    /// Only with `metaInformation=true`
    #[serde(default, deserialize_with = "lenient::string")]
    pub aisle: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub possible_units: Vec<String>,
}

/// `GET /food/ingredients/{id}/information`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInformation {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub original_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub possible_units: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub shopping_list_units: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub estimated_cost: Option<EstimatedCost>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub consistency: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub aisle: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub category_path: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimatedCost {
    #[serde(default, deserialize_with = "lenient::float")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default, deserialize_with = "lenient::list")]
    pub nutrients: Vec<Nutrient>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub caloric_breakdown: Option<CaloricBreakdown>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub weight_per_serving: Option<Measure>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub percent_of_daily_needs: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaloricBreakdown {
    #[serde(default, deserialize_with = "lenient::float")]
    pub percent_protein: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub percent_fat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub percent_carbs: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Measure {
    #[serde(default, deserialize_with = "lenient::float")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
}

/// `GET /food/products/search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProductSearchResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub products: Vec<ProductHit>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub number: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_products: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHit {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image_type: Option<String>,
}

/// `GET /food/products/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProductInformation {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub badges: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub important_badges: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub breadcrumbs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub aisle: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub ingredient_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ingredient_list: Option<String>,
    /// Price in US cents
    #[serde(default, deserialize_with = "lenient::float")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub servings: Option<Servings>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub upc: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Servings {
    #[serde(default, deserialize_with = "lenient::float")]
    pub number: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub size: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
}

/// `POST /food/ingredients/map` returns a bare array
///
/// Anything other than an array is a decode error, not an empty mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct IngredientMapResponse(
    #[serde(deserialize_with = "lenient::array")] pub Vec<IngredientMapEntry>,
);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMapEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub original_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ingredient_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub meta: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub products: Vec<MappedProduct>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappedProduct {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub upc: Option<String>,
}

/// `GET /recipes/complexSearch`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub results: Vec<RecipeHit>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub number: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_results: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeHit {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    /// Only with `addRecipeInformation=true`
    #[serde(default, deserialize_with = "lenient::int")]
    pub ready_in_minutes: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub servings: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_url: Option<String>,
}

/// `GET /recipes/{id}/information`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub servings: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub ready_in_minutes: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub cuisines: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub dish_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub diets: Vec<String>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub vegetarian: Option<bool>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub vegan: Option<bool>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub gluten_free: Option<bool>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub dairy_free: Option<bool>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub extended_ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub original: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub aisle: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_search_partial_payload() {
        let json = r#"{
            "results": [
                {"id": 9003, "name": "apple", "image": "apple.jpg"},
                {"id": "9040", "name": "banana"},
                "garbage"
            ],
            "totalResults": 2
        }"#;
        let data: IngredientSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.results.len(), 2);
        assert_eq!(data.results[1].id, Some(9040));
        assert!(data.results[1].image.is_none());
        assert_eq!(data.total_results, Some(2));
        assert!(data.offset.is_none());
    }

    #[test]
    fn test_ingredient_map_bare_array() {
        let json = r#"[
            {"original": "milk", "originalName": "milk", "products": [{"id": 1, "title": "Whole Milk", "upc": "0123"}]},
            {"original": "eggs", "products": "none"}
        ]"#;
        let data: IngredientMapResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.0.len(), 2);
        assert_eq!(data.0[0].products[0].title.as_deref(), Some("Whole Milk"));
        assert!(data.0[1].products.is_empty());
    }

    #[test]
    fn test_ingredient_map_not_an_array() {
        assert!(serde_json::from_str::<IngredientMapResponse>(r#"{"status":"failure"}"#).is_err());
        assert!(serde_json::from_str::<IngredientMapResponse>("null").is_err());

        let data: IngredientMapResponse = serde_json::from_str("[]").unwrap();
        assert!(data.0.is_empty());
    }

    #[test]
    fn test_recipe_information_nested_nutrition() {
        let json = r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "vegetarian": true,
            "extendedIngredients": [{"id": 1001, "name": "butter", "amount": "1", "unit": "tbsp"}],
            "nutrition": {"nutrients": [{"name": "Calories", "amount": 584.46, "unit": "kcal"}]}
        }"#;
        let data: RecipeInformation = serde_json::from_str(json).unwrap();
        assert_eq!(data.vegetarian, Some(true));
        assert_eq!(data.extended_ingredients[0].amount, Some(1.0));
        let nutrition = data.nutrition.unwrap();
        assert_eq!(nutrition.nutrients[0].name.as_deref(), Some("Calories"));
    }
}
