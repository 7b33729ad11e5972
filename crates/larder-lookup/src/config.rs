use std::env;
use std::time::Duration;

use request_throttle::ThrottleConfig;
use spoonacular_client::{ClientConfig, ProviderAuth, DEFAULT_GATEWAY_HOST};
use tracing::warn;

const DEFAULT_CACHE_TTL_SECS: u64 = 12 * 60 * 60;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Lookup configuration parsed from environment variables, read once at startup
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// `None` when no key is configured; lookups then fail with a configuration error
    pub auth: Option<ProviderAuth>,
    pub base_url: Option<String>,
    pub throttle: ThrottleConfig,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub database_url: Option<String>,
}

impl LookupConfig {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from an arbitrary variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| var(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let auth = resolve_auth(
            var("SPOONACULAR_AUTH_MODE").as_deref(),
            var("SPOONACULAR_API_KEY"),
            var("RAPIDAPI_KEY"),
            var("RAPIDAPI_HOST"),
        );

        let defaults = ThrottleConfig::default();
        let max_concurrent_requests = parse_or(
            "SPOONACULAR_MAX_CONCURRENT_REQUESTS",
            var("SPOONACULAR_MAX_CONCURRENT_REQUESTS"),
            defaults.max_concurrent_requests(),
        );
        let min_interval = Duration::from_millis(parse_or(
            "SPOONACULAR_MIN_INTERVAL_MS",
            var("SPOONACULAR_MIN_INTERVAL_MS"),
            defaults.min_interval().as_millis() as u64,
        ));
        let throttle = ThrottleConfig::new(max_concurrent_requests, min_interval)
            .unwrap_or_else(|e| {
                warn!(
                    variable = "SPOONACULAR_MAX_CONCURRENT_REQUESTS",
                    value = max_concurrent_requests,
                    error = %e,
                    "Out of range, using default"
                );
                defaults.with_min_interval(min_interval)
            });

        let cache_ttl = Duration::from_secs(parse_or(
            "SPOONACULAR_CACHE_TTL_SECS",
            var("SPOONACULAR_CACHE_TTL_SECS"),
            DEFAULT_CACHE_TTL_SECS,
        ));
        let request_timeout = Duration::from_secs(parse_or(
            "SPOONACULAR_TIMEOUT_SECS",
            var("SPOONACULAR_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        ));

        Self {
            auth,
            base_url: var("SPOONACULAR_BASE_URL"),
            throttle,
            cache_ttl,
            request_timeout,
            database_url: var("DATABASE_URL"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.auth.clone()).with_timeout(self.request_timeout);
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url.clone());
        }
        config
    }
}

/// An explicit mode wins; otherwise a RapidAPI key selects the gateway and a
/// Spoonacular key selects direct access
fn resolve_auth(
    mode: Option<&str>,
    api_key: Option<String>,
    rapidapi_key: Option<String>,
    rapidapi_host: Option<String>,
) -> Option<ProviderAuth> {
    let gateway = |key: String| {
        ProviderAuth::gateway(
            key,
            rapidapi_host
                .clone()
                .unwrap_or_else(|| DEFAULT_GATEWAY_HOST.to_string()),
        )
    };

    match mode.map(str::to_lowercase).as_deref() {
        Some("direct") => api_key.map(ProviderAuth::direct),
        Some("rapidapi") | Some("gateway") => rapidapi_key.map(gateway),
        Some(other) => {
            warn!(mode = other, "Unknown SPOONACULAR_AUTH_MODE, inferring from keys");
            rapidapi_key
                .map(gateway)
                .or_else(|| api_key.map(ProviderAuth::direct))
        }
        None => rapidapi_key
            .map(gateway)
            .or_else(|| api_key.map(ProviderAuth::direct)),
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> LookupConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LookupConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert!(config.auth.is_none());
        assert_eq!(config.throttle.max_concurrent_requests(), 2);
        assert_eq!(config.throttle.min_interval(), Duration::from_millis(1000));
        assert_eq!(config.cache_ttl, Duration::from_secs(43_200));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_direct_key() {
        let config = config(&[("SPOONACULAR_API_KEY", "abc")]);
        assert_eq!(config.auth, Some(ProviderAuth::direct("abc")));
    }

    #[test]
    fn test_rapidapi_key_selects_gateway() {
        let config = config(&[("SPOONACULAR_API_KEY", "abc"), ("RAPIDAPI_KEY", "rk")]);
        assert_eq!(
            config.auth,
            Some(ProviderAuth::gateway("rk", DEFAULT_GATEWAY_HOST))
        );
    }

    #[test]
    fn test_explicit_direct_mode_wins() {
        let config = config(&[
            ("SPOONACULAR_AUTH_MODE", "Direct"),
            ("SPOONACULAR_API_KEY", "abc"),
            ("RAPIDAPI_KEY", "rk"),
        ]);
        assert_eq!(config.auth, Some(ProviderAuth::direct("abc")));
    }

    #[test]
    fn test_gateway_mode_without_key_has_no_auth() {
        let config = config(&[
            ("SPOONACULAR_AUTH_MODE", "rapidapi"),
            ("SPOONACULAR_API_KEY", "abc"),
        ]);
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_custom_gateway_host() {
        let config = config(&[("RAPIDAPI_KEY", "rk"), ("RAPIDAPI_HOST", "spoon.example.com")]);
        assert_eq!(
            config.auth,
            Some(ProviderAuth::gateway("rk", "spoon.example.com"))
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = config(&[("SPOONACULAR_API_KEY", "   "), ("DATABASE_URL", "")]);
        assert!(config.auth.is_none());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_throttle_overrides() {
        let config = config(&[
            ("SPOONACULAR_MAX_CONCURRENT_REQUESTS", "4"),
            ("SPOONACULAR_MIN_INTERVAL_MS", "250"),
            ("SPOONACULAR_CACHE_TTL_SECS", "60"),
        ]);
        assert_eq!(config.throttle.max_concurrent_requests(), 4);
        assert_eq!(config.throttle.min_interval(), Duration::from_millis(250));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config(&[
            ("SPOONACULAR_MAX_CONCURRENT_REQUESTS", "0"),
            ("SPOONACULAR_MIN_INTERVAL_MS", "soon"),
        ]);
        assert_eq!(config.throttle.max_concurrent_requests(), 2);
        assert_eq!(config.throttle.min_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_oversized_concurrency_falls_back() {
        let config = config(&[
            ("SPOONACULAR_MAX_CONCURRENT_REQUESTS", "18446744073709551615"),
            ("SPOONACULAR_MIN_INTERVAL_MS", "50"),
        ]);
        assert_eq!(config.throttle.max_concurrent_requests(), 2);
        assert_eq!(config.throttle.min_interval(), Duration::from_millis(50));

        // Building the throttle from the parsed config must not panic
        let throttle = request_throttle::Throttle::new(config.throttle);
        assert_eq!(throttle.active_count(), 0);
    }

    #[test]
    fn test_client_config_base_url_override() {
        let config = config(&[
            ("SPOONACULAR_API_KEY", "abc"),
            ("SPOONACULAR_BASE_URL", "http://localhost:9999"),
            ("SPOONACULAR_TIMEOUT_SECS", "5"),
        ]);
        let client = config.client_config();
        assert_eq!(client.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
