//! Spoonacular API HTTP client

use std::sync::Arc;
use std::time::Duration;

use request_throttle::Throttle;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::{ProviderAuth, DIRECT_BASE_URL};
use crate::error::{Result, SpoonacularError};
use crate::params::*;
use crate::types::*;

const DEFAULT_USER_AGENT: &str = "spoonacular-client-rs/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client construction options
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `None` leaves the client usable but every call fails with `MissingCredentials`
    pub auth: Option<ProviderAuth>,
    /// Overrides the auth mode's default base URL
    pub base_url: Option<String>,
    /// Deadline for one outbound call, including reading the body
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(auth: Option<ProviderAuth>) -> Self {
        Self {
            auth,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Throttled client for the Spoonacular API
///
/// Every outbound call is admitted through the shared [`Throttle`] and holds
/// its permit until the response body has been read.
pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: String,
    auth: Option<ProviderAuth>,
    throttle: Arc<Throttle>,
}

impl SpoonacularClient {
    pub fn new(config: ClientConfig, throttle: Arc<Throttle>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = config
            .base_url
            .or_else(|| config.auth.as_ref().map(ProviderAuth::default_base_url))
            .unwrap_or_else(|| DIRECT_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: config.auth,
            throttle,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn throttle(&self) -> &Arc<Throttle> {
        &self.throttle
    }

    /// Throttled `GET` returning the decoded JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let auth = self.credentials()?;
        let request = self.http.get(self.url(path, query));
        self.send(auth.apply(request)).await
    }

    /// Throttled `POST` with a JSON body, returning the decoded JSON body
    pub async fn post_json<T, B>(&self, path: &str, query: &[(&str, String)], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let auth = self.credentials()?;
        let request = self.http.post(self.url(path, query)).json(body);
        self.send(auth.apply(request)).await
    }

    /// Search the ingredient catalogue
    pub async fn search_ingredients(
        &self,
        params: &IngredientSearchParams,
    ) -> Result<IngredientSearchResponse> {
        self.get_json("/food/ingredients/search", &params.query_pairs())
            .await
    }

    /// Ingredient detail, optionally scaled to an amount and unit
    pub async fn ingredient_information(
        &self,
        params: &IngredientInfoParams,
    ) -> Result<IngredientInformation> {
        let path = format!("/food/ingredients/{}/information", params.id);
        self.get_json(&path, &params.query_pairs()).await
    }

    /// Search packaged grocery products
    pub async fn search_grocery_products(
        &self,
        params: &GroceryProductSearchParams,
    ) -> Result<GroceryProductSearchResponse> {
        self.get_json("/food/products/search", &params.query_pairs())
            .await
    }

    /// Grocery product detail by id
    pub async fn grocery_product(
        &self,
        params: &GroceryProductParams,
    ) -> Result<GroceryProductInformation> {
        let path = format!("/food/products/{}", params.id);
        self.get_json(&path, &[]).await
    }

    /// Map free-text ingredients to grocery products
    pub async fn map_ingredients(
        &self,
        params: &IngredientMapParams,
    ) -> Result<IngredientMapResponse> {
        self.post_json("/food/ingredients/map", &[], params).await
    }

    /// Recipe search with filters
    pub async fn search_recipes(&self, params: &RecipeSearchParams) -> Result<RecipeSearchResponse> {
        self.get_json("/recipes/complexSearch", &params.query_pairs())
            .await
    }

    /// Recipe detail by id
    pub async fn recipe_information(&self, params: &RecipeInfoParams) -> Result<RecipeInformation> {
        let path = format!("/recipes/{}/information", params.id);
        self.get_json(&path, &params.query_pairs()).await
    }

    fn credentials(&self) -> Result<&ProviderAuth> {
        self.auth.as_ref().ok_or(SpoonacularError::MissingCredentials)
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (name, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let permit = self.throttle.acquire().await?;

        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        permit.release();

        if !status.is_success() {
            warn!(status = status.as_u16(), path = %url, "Spoonacular returned error status");
            return Err(SpoonacularError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        debug!(path = %url, bytes = body.len(), "Spoonacular response received");
        Ok(serde_json::from_str(&body)?)
    }
}
