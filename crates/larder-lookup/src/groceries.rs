//! Grocery product lookups

use spoonacular_client::{
    GroceryProductInformation, GroceryProductParams, GroceryProductSearchParams,
    GroceryProductSearchResponse,
};

use crate::broker::{total_or_len, FoodLookup, Rehydrate};
use crate::error::{LookupError, NormalizationError, Result};
use crate::keys::Namespace;
use crate::normalize::{count, nutrient_amounts, required_id};
use crate::types::{GroceryProduct, GroceryProductDetail, LookupResult, ServingSize};

impl FoodLookup {
    /// Search packaged grocery products
    pub async fn search_grocery_products(
        &self,
        params: &GroceryProductSearchParams,
    ) -> Result<LookupResult<Vec<GroceryProduct>>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::Groceries, request, || async move {
            let raw = client.search_grocery_products(request).await?;
            normalize_product_search(raw)
        })
        .await
    }

    /// Grocery product detail; `results` holds the single record
    pub async fn grocery_product(
        &self,
        params: &GroceryProductParams,
    ) -> Result<LookupResult<GroceryProductDetail>> {
        let params = params.canonicalize();
        let client = &self.client;
        let request = &params;
        self.read_through(Namespace::GroceryProduct, request, || async move {
            let raw = client.grocery_product(request).await?;
            Ok::<_, LookupError>((normalize_product_detail(raw)?, 1))
        })
        .await
    }
}

impl Rehydrate for GroceryProduct {}
impl Rehydrate for GroceryProductDetail {}

pub(crate) fn normalize_product_search(
    raw: GroceryProductSearchResponse,
) -> Result<(Vec<GroceryProduct>, u64)> {
    let results = raw
        .products
        .into_iter()
        .map(|hit| {
            Ok(GroceryProduct {
                id: required_id(hit.id, "grocery product")?,
                title: hit.title.unwrap_or_default(),
                image: hit.image,
            })
        })
        .collect::<std::result::Result<Vec<_>, NormalizationError>>()?;

    let total = total_or_len(raw.total_products, results.len());
    Ok((results, total))
}

pub(crate) fn normalize_product_detail(
    raw: GroceryProductInformation,
) -> std::result::Result<GroceryProductDetail, NormalizationError> {
    let id = required_id(raw.id, "grocery product")?;

    // Important badges first, then the rest without repeats
    let mut badges = raw.important_badges;
    for badge in raw.badges {
        if !badges.contains(&badge) {
            badges.push(badge);
        }
    }

    Ok(GroceryProductDetail {
        id,
        title: raw.title.unwrap_or_default(),
        brand: raw.brand,
        description: raw.description,
        image: raw.image,
        images: raw.images,
        badges,
        breadcrumbs: raw.breadcrumbs,
        aisle: raw.aisle,
        ingredient_count: count(raw.ingredient_count),
        ingredient_list: raw.ingredient_list,
        price: raw.price,
        servings: raw.servings.map(|s| ServingSize {
            number: s.number,
            size: s.size,
            unit: s.unit,
        }),
        upc: raw.upc,
        nutrients: nutrient_amounts(raw.nutrition.unwrap_or_default().nutrients),
    })
}
