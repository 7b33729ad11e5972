//! Request parameters for Spoonacular endpoints
//!
//! Each parameter struct serializes with a fixed field order (declaration
//! order) and has a `canonicalize` step: free text is trimmed and
//! lowercased, list filters are sorted and de-duplicated, and page sizes are
//! clamped to what the provider accepts. Two requests that differ only in
//! presentation canonicalize to the same value.

use serde::Serialize;

/// Spoonacular rejects `number` outside 1..=100
const MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Trim and case-fold a free-text field
pub fn canonical_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Canonical form of an optional free-text field; blank becomes `None`
pub fn canonical_opt_text(s: Option<&str>) -> Option<String> {
    s.map(canonical_text).filter(|s| !s.is_empty())
}

/// Trim, case-fold, drop blanks, sort and de-duplicate a list filter
pub fn canonical_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut out: Vec<String> = items
        .iter()
        .map(|s| canonical_text(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

fn clamp_page_size(number: u32) -> u32 {
    number.clamp(1, MAX_PAGE_SIZE)
}

fn push_list(pairs: &mut Vec<(&'static str, String)>, name: &'static str, items: &[String]) {
    if !items.is_empty() {
        pairs.push((name, items.join(",")));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// `GET /food/ingredients/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSearchParams {
    pub query: String,
    pub number: u32,
    pub offset: u32,
    pub intolerances: Vec<String>,
    pub sort: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub meta_information: bool,
}

impl IngredientSearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            number: DEFAULT_PAGE_SIZE,
            offset: 0,
            intolerances: Vec::new(),
            sort: None,
            sort_direction: None,
            meta_information: false,
        }
    }

    pub fn canonicalize(&self) -> Self {
        Self {
            query: canonical_text(&self.query),
            number: clamp_page_size(self.number),
            offset: self.offset,
            intolerances: canonical_list(&self.intolerances),
            sort: canonical_opt_text(self.sort.as_deref()),
            sort_direction: self.sort_direction,
            meta_information: self.meta_information,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("number", self.number.to_string()),
            ("offset", self.offset.to_string()),
        ];
        push_list(&mut pairs, "intolerances", &self.intolerances);
        if let Some(ref sort) = self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push(("sortDirection", direction.as_str().to_string()));
        }
        if self.meta_information {
            pairs.push(("metaInformation", "true".to_string()));
        }
        pairs
    }
}

/// `GET /food/ingredients/{id}/information`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientInfoParams {
    pub id: i64,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

impl IngredientInfoParams {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            amount: None,
            unit: None,
        }
    }

    pub fn canonicalize(&self) -> Self {
        Self {
            id: self.id,
            amount: self.amount.filter(|a| a.is_finite() && *a > 0.0),
            unit: canonical_opt_text(self.unit.as_deref()),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(amount) = self.amount {
            pairs.push(("amount", amount.to_string()));
        }
        if let Some(ref unit) = self.unit {
            pairs.push(("unit", unit.clone()));
        }
        pairs
    }
}

/// `GET /food/products/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProductSearchParams {
    pub query: String,
    pub number: u32,
    pub offset: u32,
}

impl GroceryProductSearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            number: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    pub fn canonicalize(&self) -> Self {
        Self {
            query: canonical_text(&self.query),
            number: clamp_page_size(self.number),
            offset: self.offset,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("number", self.number.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// `GET /food/products/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroceryProductParams {
    pub id: i64,
}

impl GroceryProductParams {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn canonicalize(&self) -> Self {
        *self
    }
}

/// `POST /food/ingredients/map`; also the JSON request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientMapParams {
    pub ingredients: Vec<String>,
    pub servings: u32,
}

impl IngredientMapParams {
    pub fn new<S: AsRef<str>>(ingredients: &[S]) -> Self {
        Self {
            ingredients: ingredients.iter().map(|s| s.as_ref().to_string()).collect(),
            servings: 1,
        }
    }

    pub fn canonicalize(&self) -> Self {
        Self {
            ingredients: canonical_list(&self.ingredients),
            servings: self.servings.max(1),
        }
    }
}

/// `GET /recipes/complexSearch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchParams {
    pub query: String,
    pub cuisines: Vec<String>,
    pub diet: Option<String>,
    pub intolerances: Vec<String>,
    pub include_ingredients: Vec<String>,
    pub max_ready_time: Option<u32>,
    pub number: u32,
    pub offset: u32,
    pub add_recipe_information: bool,
}

impl RecipeSearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cuisines: Vec::new(),
            diet: None,
            intolerances: Vec::new(),
            include_ingredients: Vec::new(),
            max_ready_time: None,
            number: DEFAULT_PAGE_SIZE,
            offset: 0,
            add_recipe_information: false,
        }
    }

    pub fn canonicalize(&self) -> Self {
        Self {
            query: canonical_text(&self.query),
            cuisines: canonical_list(&self.cuisines),
            diet: canonical_opt_text(self.diet.as_deref()),
            intolerances: canonical_list(&self.intolerances),
            include_ingredients: canonical_list(&self.include_ingredients),
            max_ready_time: self.max_ready_time,
            number: clamp_page_size(self.number),
            offset: self.offset,
            add_recipe_information: self.add_recipe_information,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        push_list(&mut pairs, "cuisine", &self.cuisines);
        if let Some(ref diet) = self.diet {
            pairs.push(("diet", diet.clone()));
        }
        push_list(&mut pairs, "intolerances", &self.intolerances);
        push_list(&mut pairs, "includeIngredients", &self.include_ingredients);
        if let Some(minutes) = self.max_ready_time {
            pairs.push(("maxReadyTime", minutes.to_string()));
        }
        pairs.push(("number", self.number.to_string()));
        pairs.push(("offset", self.offset.to_string()));
        if self.add_recipe_information {
            pairs.push(("addRecipeInformation", "true".to_string()));
        }
        pairs
    }
}

/// `GET /recipes/{id}/information`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInfoParams {
    pub id: i64,
    pub include_nutrition: bool,
}

impl RecipeInfoParams {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            include_nutrition: false,
        }
    }

    pub fn canonicalize(&self) -> Self {
        *self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("includeNutrition", self.include_nutrition.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_list_order_and_case_independent() {
        assert_eq!(
            canonical_list(&["egg", "dairy"]),
            canonical_list(&[" Dairy", "EGG", "egg", ""])
        );
        assert_eq!(canonical_list(&["egg", "dairy"]), vec!["dairy", "egg"]);
    }

    #[test]
    fn test_canonical_opt_text_blank_is_none() {
        assert_eq!(canonical_opt_text(Some("   ")), None);
        assert_eq!(canonical_opt_text(Some(" Cup ")), Some("cup".to_string()));
        assert_eq!(canonical_opt_text(None), None);
    }

    #[test]
    fn test_ingredient_search_canonicalize() {
        let mut params = IngredientSearchParams::new("  Whole MILK ");
        params.number = 500;
        params.intolerances = vec!["Gluten".into(), "dairy".into()];

        let canonical = params.canonicalize();
        assert_eq!(canonical.query, "whole milk");
        assert_eq!(canonical.number, 100);
        assert_eq!(canonical.intolerances, vec!["dairy", "gluten"]);
    }

    #[test]
    fn test_ingredient_search_query_pairs() {
        let mut params = IngredientSearchParams::new("apple");
        params.intolerances = vec!["dairy".into(), "egg".into()];
        params.sort_direction = Some(SortDirection::Desc);
        params.meta_information = true;

        let pairs = params.query_pairs();
        assert!(pairs.contains(&("query", "apple".to_string())));
        assert!(pairs.contains(&("intolerances", "dairy,egg".to_string())));
        assert!(pairs.contains(&("sortDirection", "desc".to_string())));
        assert!(pairs.contains(&("metaInformation", "true".to_string())));
    }

    #[test]
    fn test_page_size_floor() {
        let mut params = GroceryProductSearchParams::new("milk");
        params.number = 0;
        assert_eq!(params.canonicalize().number, 1);
    }

    #[test]
    fn test_ingredient_info_drops_invalid_amount() {
        let params = IngredientInfoParams {
            id: 9266,
            amount: Some(-1.0),
            unit: Some(" Grams ".into()),
        };
        let canonical = params.canonicalize();
        assert_eq!(canonical.amount, None);
        assert_eq!(canonical.unit.as_deref(), Some("grams"));
        assert_eq!(canonical.query_pairs(), vec![("unit", "grams".to_string())]);
    }

    #[test]
    fn test_map_params_serialize_as_body() {
        let params = IngredientMapParams::new(&["Eggs", "milk", "eggs"]).canonicalize();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "ingredients": ["eggs", "milk"], "servings": 1 })
        );
    }

    #[test]
    fn test_recipe_search_query_pairs_skip_empty() {
        let mut params = RecipeSearchParams::new("");
        params.include_ingredients = vec!["tomato".into(), "basil".into()];
        let pairs = params.canonicalize().query_pairs();
        assert!(!pairs.iter().any(|(k, _)| *k == "query"));
        assert!(pairs.contains(&("includeIngredients", "basil,tomato".to_string())));
    }
}
