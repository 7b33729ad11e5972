//! Rust client for the Spoonacular food and recipe API
//!
//! Every call is admitted through a shared [`request_throttle::Throttle`] so
//! the provider's concurrency and request-spacing limits hold across all call
//! sites. Responses decode into lenient raw types: any field may be missing or
//! malformed without failing the call.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use request_throttle::Throttle;
//! use spoonacular_client::{ClientConfig, GroceryProductSearchParams, ProviderAuth, SpoonacularClient};
//!
//! # async fn example() -> Result<(), spoonacular_client::SpoonacularError> {
//! let throttle = Arc::new(Throttle::default());
//! let client = SpoonacularClient::new(
//!     ClientConfig::new(Some(ProviderAuth::direct("api-key"))),
//!     throttle,
//! )?;
//!
//! let page = client
//!     .search_grocery_products(&GroceryProductSearchParams::new("milk"))
//!     .await?;
//! for product in page.products {
//!     println!("{:?}", product.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /food/ingredients/search`
//! - `GET /food/ingredients/{id}/information`
//! - `POST /food/ingredients/map`
//! - `GET /food/products/search`
//! - `GET /food/products/{id}`
//! - `GET /recipes/complexSearch`
//! - `GET /recipes/{id}/information`

mod auth;
mod client;
mod error;
mod lenient;
mod params;
mod types;

pub use auth::{ProviderAuth, DEFAULT_GATEWAY_HOST, DIRECT_BASE_URL};
pub use client::{ClientConfig, SpoonacularClient};
pub use error::{Result, SpoonacularError};
pub use params::{
    canonical_list, canonical_opt_text, canonical_text, GroceryProductParams,
    GroceryProductSearchParams, IngredientInfoParams, IngredientMapParams, IngredientSearchParams,
    RecipeInfoParams, RecipeSearchParams, SortDirection,
};
pub use types::{
    CaloricBreakdown, EstimatedCost, GroceryProductInformation, GroceryProductSearchResponse,
    IngredientHit, IngredientInformation, IngredientMapEntry, IngredientMapResponse,
    IngredientSearchResponse, MappedProduct, Measure, Nutrient, Nutrition, ProductHit,
    RecipeHit, RecipeIngredient, RecipeInformation, RecipeSearchResponse, Servings,
};
