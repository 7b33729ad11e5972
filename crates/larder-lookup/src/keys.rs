//! Cache key derivation
//!
//! A key is `"<namespace>:<sha256 hex>"` over the JSON serialization of the
//! canonicalized request. Field order comes from the parameter struct's
//! declaration order, so keys are stable across processes and restarts.

use serde::Serialize;
use sha2::{Digest, Sha256};

pub use spoonacular_client::{canonical_list, canonical_opt_text, canonical_text};

/// Per-domain keyspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Ingredients,
    IngredientInfo,
    Groceries,
    GroceryProduct,
    IngredientMap,
    Recipes,
    RecipeInfo,
}

impl Namespace {
    pub const ALL: [Namespace; 7] = [
        Self::Ingredients,
        Self::IngredientInfo,
        Self::Groceries,
        Self::GroceryProduct,
        Self::IngredientMap,
        Self::Recipes,
        Self::RecipeInfo,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Ingredients => "ingredients",
            Self::IngredientInfo => "ingredient-info",
            Self::Groceries => "groceries",
            Self::GroceryProduct => "grocery-product",
            Self::IngredientMap => "map",
            Self::Recipes => "recipes",
            Self::RecipeInfo => "recipe-info",
        }
    }
}

/// Derive the cache key for an already-canonicalized request
pub fn derive_key<T: Serialize + ?Sized>(
    namespace: Namespace,
    canonical_request: &T,
) -> Result<String, serde_json::Error> {
    let serialized = serde_json::to_vec(canonical_request)?;
    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    Ok(format!("{}:{}", namespace.prefix(), hex::encode(hasher.finalize())))
}
