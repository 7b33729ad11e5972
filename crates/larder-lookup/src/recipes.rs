//! Recipe lookups

use spoonacular_client::{
    RecipeInfoParams, RecipeInformation, RecipeSearchParams, RecipeSearchResponse,
};

use crate::broker::{total_or_len, FoodLookup, Rehydrate};
use crate::error::{LookupError, NormalizationError, Result};
use crate::keys::Namespace;
use crate::normalize::{count, ingredient_image_url, nutrient_amounts, required_id};
use crate::types::{LookupResult, RecipeDetail, RecipeIngredientLine, RecipeSummary};

impl FoodLookup {
    /// Recipe search with cuisine, diet, intolerance and ingredient filters
    pub async fn search_recipes(
        &self,
        params: &RecipeSearchParams,
    ) -> Result<LookupResult<Vec<RecipeSummary>>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::Recipes, request, || async move {
            let raw = client.search_recipes(request).await?;
            normalize_recipe_search(raw)
        })
        .await
    }

    /// Recipe detail; `results` holds the single record
    pub async fn recipe_information(
        &self,
        params: &RecipeInfoParams,
    ) -> Result<LookupResult<RecipeDetail>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::RecipeInfo, request, || async move {
            let raw = client.recipe_information(request).await?;
            Ok::<_, LookupError>((normalize_recipe_information(raw)?, 1))
        })
        .await
    }
}

impl Rehydrate for RecipeSummary {}
impl Rehydrate for RecipeDetail {}

pub(crate) fn normalize_recipe_search(
    raw: RecipeSearchResponse,
) -> Result<(Vec<RecipeSummary>, u64)> {
    let results = raw
        .results
        .into_iter()
        .map(|hit| {
            Ok(RecipeSummary {
                id: required_id(hit.id, "recipe")?,
                title: hit.title.unwrap_or_default(),
                image: hit.image,
                ready_in_minutes: count(hit.ready_in_minutes),
                servings: count(hit.servings),
                source_url: hit.source_url,
            })
        })
        .collect::<std::result::Result<Vec<_>, NormalizationError>>()?;

    let total = total_or_len(raw.total_results, results.len());
    Ok((results, total))
}

pub(crate) fn normalize_recipe_information(
    raw: RecipeInformation,
) -> std::result::Result<RecipeDetail, NormalizationError> {
    let id = required_id(raw.id, "recipe")?;

    let ingredients = raw
        .extended_ingredients
        .into_iter()
        .map(|line| RecipeIngredientLine {
            id: line.id.filter(|id| *id > 0),
            name: line.name,
            original: line.original,
            amount: line.amount,
            unit: line.unit,
            aisle: line.aisle,
            image_url: ingredient_image_url(line.image.as_deref()),
        })
        .collect();

    Ok(RecipeDetail {
        id,
        title: raw.title.unwrap_or_default(),
        image: raw.image,
        servings: count(raw.servings),
        ready_in_minutes: count(raw.ready_in_minutes),
        source_url: raw.source_url,
        source_name: raw.source_name,
        summary: raw.summary,
        instructions: raw.instructions,
        cuisines: raw.cuisines,
        dish_types: raw.dish_types,
        diets: raw.diets,
        vegetarian: raw.vegetarian,
        vegan: raw.vegan,
        gluten_free: raw.gluten_free,
        dairy_free: raw.dairy_free,
        ingredients,
        nutrients: nutrient_amounts(raw.nutrition.unwrap_or_default().nutrients),
    })
}
