//! Rate-limited, read-through cached food and recipe lookups
//!
//! [`FoodLookup`] fronts the Spoonacular API. Every lookup derives a cache key
//! from its canonicalized parameters and serves a fresh cached result when one
//! exists. Otherwise it calls the provider through the shared throttle,
//! normalizes the payload into a stable record shape and caches that.
//!
//! # Example
//!
//! ```no_run
//! use larder_lookup::{connect_store, FoodLookup, LookupConfig};
//! use spoonacular_client::GroceryProductSearchParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookupConfig::from_env();
//! let store = connect_store(config.database_url.as_deref()).await?;
//! let lookup = FoodLookup::from_config(&config, store)?;
//!
//! let milk = lookup
//!     .search_grocery_products(&GroceryProductSearchParams::new("milk"))
//!     .await?;
//! println!("{} results (cached: {})", milk.total_results, milk.cached);
//! # Ok(())
//! # }
//! ```
//!
//! # Lookups
//!
//! - `search_ingredients` / `ingredient_information`
//! - `map_ingredients_to_products`
//! - `search_grocery_products` / `grocery_product`
//! - `search_recipes` / `recipe_information`

mod broker;
pub mod config;
pub mod error;
mod groceries;
mod ingredients;
pub mod keys;
mod normalize;
mod recipes;
pub mod store;
pub mod types;

pub use broker::FoodLookup;
pub use config::LookupConfig;
pub use error::{LookupError, NormalizationError, Result};
pub use keys::{derive_key, Namespace};
pub use store::{
    connect_store, is_fresh, CacheEntry, CacheStore, CacheStoreError, MemoryCacheStore,
    PgCacheStore,
};
pub use types::{
    CacheStats, CaloricSplit, GroceryProduct, GroceryProductDetail, IngredientInfo,
    IngredientMapping, IngredientSummary, LookupResult, MappedGroceryProduct, NutrientAmount,
    Quantity, RecipeDetail, RecipeIngredientLine, RecipeSummary, ServingSize,
};
