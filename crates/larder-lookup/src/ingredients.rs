//! Ingredient lookups: catalogue search, ingredient detail, and mapping
//! free-text ingredients to grocery products

use spoonacular_client::{
    IngredientInfoParams, IngredientInformation, IngredientMapParams, IngredientMapResponse,
    IngredientSearchParams, IngredientSearchResponse,
};
use tracing::debug;

use crate::broker::{total_or_len, FoodLookup, Rehydrate};
use crate::error::{LookupError, NormalizationError, Result};
use crate::keys::Namespace;
use crate::normalize::{
    caloric_split, ingredient_image_url, nutrient_amounts, quantity, required_id,
};
use crate::types::{
    IngredientInfo, IngredientMapping, IngredientSummary, LookupResult, MappedGroceryProduct,
    Quantity,
};

impl FoodLookup {
    /// Search the ingredient catalogue
    pub async fn search_ingredients(
        &self,
        params: &IngredientSearchParams,
    ) -> Result<LookupResult<Vec<IngredientSummary>>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::Ingredients, request, || async move {
            let raw = client.search_ingredients(request).await?;
            normalize_ingredient_search(raw)
        })
        .await
    }

    /// Ingredient detail; `results` holds the single record
    pub async fn ingredient_information(
        &self,
        params: &IngredientInfoParams,
    ) -> Result<LookupResult<IngredientInfo>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::IngredientInfo, request, || async move {
            let raw = client.ingredient_information(request).await?;
            Ok::<_, LookupError>((normalize_ingredient_information(raw)?, 1))
        })
        .await
    }

    /// Map free-text ingredient lines to grocery products
    ///
    /// An empty ingredient list is answered locally without a provider call.
    pub async fn map_ingredients_to_products(
        &self,
        params: &IngredientMapParams,
    ) -> Result<LookupResult<Vec<IngredientMapping>>> {
        let params = params.canonicalize();
        if params.ingredients.is_empty() {
            debug!("No ingredients to map");
            return Ok(LookupResult {
                results: Vec::new(),
                total_results: 0,
                cached: false,
                cache_key: None,
            });
        }

        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::IngredientMap, request, || async move {
            let raw = client.map_ingredients(request).await?;
            normalize_ingredient_map(raw)
        })
        .await
    }
}

impl Rehydrate for IngredientSummary {
    fn rehydrate(&mut self) {
        if self.image_url.is_none() {
            self.image_url = ingredient_image_url(self.image.as_deref());
        }
    }
}

impl Rehydrate for IngredientInfo {
    fn rehydrate(&mut self) {
        if self.image_url.is_none() {
            self.image_url = ingredient_image_url(self.image.as_deref());
        }
    }
}

impl Rehydrate for IngredientMapping {}

pub(crate) fn normalize_ingredient_search(
    raw: IngredientSearchResponse,
) -> Result<(Vec<IngredientSummary>, u64)> {
    let results = raw
        .results
        .into_iter()
        .map(|hit| {
            Ok(IngredientSummary {
                id: required_id(hit.id, "ingredient")?,
                name: hit.name.unwrap_or_default(),
                image_url: ingredient_image_url(hit.image.as_deref()),
                image: hit.image,
                aisle: hit.aisle,
                possible_units: hit.possible_units,
            })
        })
        .collect::<std::result::Result<Vec<_>, NormalizationError>>()?;

    let total = total_or_len(raw.total_results, results.len());
    Ok((results, total))
}

pub(crate) fn normalize_ingredient_information(
    raw: IngredientInformation,
) -> std::result::Result<IngredientInfo, NormalizationError> {
    let id = required_id(raw.id, "ingredient")?;
    let nutrition = raw.nutrition.unwrap_or_default();

    Ok(IngredientInfo {
        id,
        name: raw.name.or(raw.original_name).unwrap_or_default(),
        original: raw.original,
        amount: raw.amount,
        unit: raw.unit,
        possible_units: raw.possible_units,
        shopping_list_units: raw.shopping_list_units,
        aisle: raw.aisle,
        consistency: raw.consistency,
        image_url: ingredient_image_url(raw.image.as_deref()),
        image: raw.image,
        category_path: raw.category_path,
        estimated_cost: raw.estimated_cost.map(|cost| Quantity {
            amount: cost.value,
            unit: cost.unit,
        }),
        nutrients: nutrient_amounts(nutrition.nutrients),
        caloric_breakdown: nutrition.caloric_breakdown.map(caloric_split),
        weight_per_serving: nutrition.weight_per_serving.map(quantity),
    })
}

pub(crate) fn normalize_ingredient_map(
    raw: IngredientMapResponse,
) -> Result<(Vec<IngredientMapping>, u64)> {
    let results = raw
        .0
        .into_iter()
        .map(|entry| {
            let products = entry
                .products
                .into_iter()
                .map(|product| {
                    Ok(MappedGroceryProduct {
                        id: required_id(product.id, "mapped product")?,
                        title: product.title.unwrap_or_default(),
                        upc: product.upc,
                    })
                })
                .collect::<std::result::Result<Vec<_>, NormalizationError>>()?;

            Ok(IngredientMapping {
                original: entry.original.unwrap_or_default(),
                original_name: entry.original_name,
                ingredient_image: entry.ingredient_image,
                meta: entry.meta,
                products,
            })
        })
        .collect::<std::result::Result<Vec<_>, NormalizationError>>()?;

    let total = results.len() as u64;
    Ok((results, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(json: serde_json::Value) -> Result<(Vec<IngredientSummary>, u64)> {
        normalize_ingredient_search(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn test_search_projects_hits() {
        let (results, total) = search(serde_json::json!({
            "results": [{ "id": 9003, "name": "apple", "image": "apple.jpg" }],
            "totalResults": 12
        }))
        .unwrap();

        assert_eq!(total, 12);
        assert_eq!(results[0].id, 9003);
        assert_eq!(results[0].image.as_deref(), Some("apple.jpg"));
        assert_eq!(
            results[0].image_url.as_deref(),
            Some("https://img.spoonacular.com/ingredients_100x100/apple.jpg")
        );
        assert!(results[0].aisle.is_none());
    }

    #[test]
    fn test_search_empty_results() {
        let (results, total) = search(serde_json::json!({ "results": [] })).unwrap();
        assert!(results.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_search_total_falls_back_to_count() {
        let (_, total) = search(serde_json::json!({
            "results": [{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }]
        }))
        .unwrap();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_search_hit_without_id_fails() {
        let err = search(serde_json::json!({ "results": [{ "name": "mystery" }] })).unwrap_err();
        assert!(matches!(
            err,
            LookupError::Normalization(NormalizationError::MissingField {
                record: "ingredient",
                field: "id"
            })
        ));
    }

    #[test]
    fn test_information_flattens_nutrition() {
        let raw: IngredientInformation = serde_json::from_value(serde_json::json!({
            "id": 9266,
            "name": "pineapples",
            "amount": 1,
            "unit": "piece",
            "estimatedCost": { "value": 299, "unit": "US Cents" },
            "image": "pineapple.jpg",
            "categoryPath": ["tropical fruit", "fruit"],
            "nutrition": {
                "nutrients": [
                    { "name": "Calories", "amount": 452.5, "unit": "kcal", "percentOfDailyNeeds": 22.63 },
                    { "amount": 3 }
                ],
                "caloricBreakdown": { "percentProtein": 4.07, "percentFat": 2.02, "percentCarbs": 93.91 },
                "weightPerServing": { "amount": 905, "unit": "g" }
            }
        }))
        .unwrap();

        let info = normalize_ingredient_information(raw).unwrap();
        assert_eq!(info.id, 9266);
        assert_eq!(info.amount, Some(1.0));
        assert_eq!(
            info.estimated_cost,
            Some(Quantity {
                amount: Some(299.0),
                unit: Some("US Cents".into())
            })
        );
        assert_eq!(info.nutrients.len(), 1);
        assert_eq!(info.caloric_breakdown.unwrap().percent_carbs, Some(93.91));
        assert_eq!(info.weight_per_serving.unwrap().amount, Some(905.0));
        assert!(info.image_url.unwrap().ends_with("/pineapple.jpg"));
    }

    #[test]
    fn test_information_without_nutrition() {
        let raw: IngredientInformation =
            serde_json::from_value(serde_json::json!({ "id": 1, "name": "salt" })).unwrap();
        let info = normalize_ingredient_information(raw).unwrap();
        assert!(info.nutrients.is_empty());
        assert!(info.caloric_breakdown.is_none());
        assert!(info.image.is_none());
    }

    #[test]
    fn test_map_projects_products() {
        let raw: IngredientMapResponse = serde_json::from_value(serde_json::json!([
            {
                "original": "milk",
                "originalName": "milk",
                "meta": [],
                "products": [{ "id": 1, "title": "Whole Milk", "upc": "0123" }]
            },
            { "original": "saffron", "products": [] }
        ]))
        .unwrap();

        let (results, total) = normalize_ingredient_map(raw).unwrap();
        assert_eq!(total, 2);
        assert_eq!(results[0].products[0].title, "Whole Milk");
        assert!(results[1].products.is_empty());
    }

    #[test]
    fn test_map_product_without_id_fails() {
        let raw: IngredientMapResponse = serde_json::from_value(serde_json::json!([
            { "original": "milk", "products": [{ "title": "Whole Milk" }] }
        ]))
        .unwrap();
        assert!(normalize_ingredient_map(raw).is_err());
    }

    #[test]
    fn test_rehydrate_fills_image_url() {
        let mut summary = IngredientSummary {
            id: 9003,
            name: "apple".into(),
            image: Some("apple.jpg".into()),
            ..Default::default()
        };
        summary.rehydrate();
        assert!(summary.image_url.unwrap().ends_with("/apple.jpg"));
    }
}
