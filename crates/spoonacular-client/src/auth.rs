//! Provider authentication modes

use reqwest::RequestBuilder;

/// Base URL for direct API access
pub const DIRECT_BASE_URL: &str = "https://api.spoonacular.com";
/// Default RapidAPI host relaying Spoonacular
pub const DEFAULT_GATEWAY_HOST: &str = "spoonacular-recipe-food-nutrition-v1.p.rapidapi.com";

/// How requests authenticate against the provider
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderAuth {
    /// `x-api-key` against api.spoonacular.com
    Direct { api_key: String },
    /// `X-RapidAPI-Key` + `X-RapidAPI-Host` against the gateway host
    Gateway { api_key: String, host: String },
}

impl ProviderAuth {
    pub fn direct(api_key: impl Into<String>) -> Self {
        Self::Direct {
            api_key: api_key.into(),
        }
    }

    pub fn gateway(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self::Gateway {
            api_key: api_key.into(),
            host: host.into(),
        }
    }

    /// Base URL used when the client config does not override it
    pub fn default_base_url(&self) -> String {
        match self {
            Self::Direct { .. } => DIRECT_BASE_URL.to_string(),
            Self::Gateway { host, .. } => format!("https://{host}"),
        }
    }

    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Direct { api_key } => request.header("x-api-key", api_key),
            Self::Gateway { api_key, host } => request
                .header("X-RapidAPI-Key", api_key)
                .header("X-RapidAPI-Host", host),
        }
    }
}

// Keys stay out of logs
impl std::fmt::Debug for ProviderAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct { .. } => f.debug_struct("Direct").finish_non_exhaustive(),
            Self::Gateway { host, .. } => f
                .debug_struct("Gateway")
                .field("host", host)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_urls() {
        assert_eq!(
            ProviderAuth::direct("k").default_base_url(),
            "https://api.spoonacular.com"
        );
        assert_eq!(
            ProviderAuth::gateway("k", DEFAULT_GATEWAY_HOST).default_base_url(),
            "https://spoonacular-recipe-food-nutrition-v1.p.rapidapi.com"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let auth = ProviderAuth::gateway("secret-key", "example.rapidapi.com");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("example.rapidapi.com"));
    }
}
