//! Read-through lookups against the rate-limited provider
//!
//! ```text
//! derive key -> cache get -- fresh --> rehydrate, cached=true
//!                   | miss / stale / store error
//!                   v
//!   throttled provider call -> normalize -> cache set (best effort) -> cached=false
//! ```
//!
//! Only cache-store failures are absorbed here. Provider, transport and
//! normalization failures propagate and are never cached. Two lookups that
//! miss the same key at once both call the provider; the later write wins.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use request_throttle::Throttle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use spoonacular_client::SpoonacularClient;
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::error::Result;
use crate::keys::{derive_key, Namespace};
use crate::store::CacheStore;
use crate::types::{CacheStats, CachedResults, LookupResult};

/// Fill in fields that cache entries written by older record shapes lack
pub(crate) trait Rehydrate {
    fn rehydrate(&mut self) {}
}

impl<T: Rehydrate> Rehydrate for Vec<T> {
    fn rehydrate(&mut self) {
        self.iter_mut().for_each(Rehydrate::rehydrate);
    }
}

/// Entry point for all provider lookups
///
/// Owns the throttled client and the cache store. Construct one per process
/// and share it (`Arc<FoodLookup>`) across request handlers.
pub struct FoodLookup {
    pub(crate) client: Arc<SpoonacularClient>,
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    store_errors: AtomicU64,
}

impl FoodLookup {
    pub fn new(client: Arc<SpoonacularClient>, store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            client,
            store,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            store_errors: AtomicU64::new(0),
        }
    }

    /// Build the throttle and client from configuration
    pub fn from_config(config: &LookupConfig, store: Arc<dyn CacheStore>) -> Result<Self> {
        let throttle = Arc::new(Throttle::new(config.throttle));
        let client = SpoonacularClient::new(config.client_config(), throttle)?;
        Ok(Self::new(Arc::new(client), store, config.cache_ttl))
    }

    pub fn cache_ttl(&self) -> Duration {
        self.ttl
    }

    pub fn throttle(&self) -> &Arc<Throttle> {
        self.client.throttle()
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }

    /// Stop admitting provider calls; cache hits keep being served
    pub fn shutdown(&self) {
        self.client.throttle().shutdown();
    }

    /// Serve `canonical_request` from the cache, or fetch, normalize and cache it
    ///
    /// `fetch` performs the provider call and normalization, returning the
    /// records and the provider's total count.
    pub(crate) async fn read_through<P, T, F, Fut>(
        &self,
        namespace: Namespace,
        canonical_request: &P,
        fetch: F,
    ) -> Result<LookupResult<T>>
    where
        P: Serialize + ?Sized,
        T: Serialize + DeserializeOwned + Rehydrate,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(T, u64)>>,
    {
        let key = derive_key(namespace, canonical_request)?;

        if let Some(mut hit) = self.cached::<T>(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(cache_key = %key, "Cache hit");
            hit.results.rehydrate();
            return Ok(LookupResult {
                results: hit.results,
                total_results: hit.total_results,
                cached: true,
                cache_key: Some(key),
            });
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(cache_key = %key, "Cache miss, fetching from provider");

        let (results, total_results) = fetch().await?;

        self.write_back(&key, &results, total_results).await;

        Ok(LookupResult {
            results,
            total_results,
            cached: false,
            cache_key: Some(key),
        })
    }

    /// A fresh, decodable entry for `key`; anything else is a miss
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<CachedResults<T>> {
        let entry = match self.store.get(key).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                self.store_errors.fetch_add(1, Ordering::Relaxed);
                warn!(cache_key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        if !entry.is_fresh_at(Utc::now()) {
            debug!(cache_key = %key, expires_at = ?entry.expires_at, "Cache entry stale");
            return None;
        }

        match serde_json::from_value(entry.payload) {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!(cache_key = %key, error = %e, "Cached payload undecodable, refetching");
                None
            }
        }
    }

    async fn write_back<T: Serialize>(&self, key: &str, results: &T, total_results: u64) {
        let payload = match serde_json::to_value(CachedResults {
            results,
            total_results,
        }) {
            Ok(payload) => payload,
            Err(e) => {
                self.store_errors.fetch_add(1, Ordering::Relaxed);
                warn!(cache_key = %key, error = %e, "Could not encode result for cache");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &payload, self.ttl).await {
            self.store_errors.fetch_add(1, Ordering::Relaxed);
            warn!(cache_key = %key, error = %e, "Cache write failed");
        }
    }
}

/// `totalResults` from the provider, or the number of records when absent
pub(crate) fn total_or_len(total: Option<i64>, len: usize) -> u64 {
    total
        .and_then(|t| u64::try_from(t).ok())
        .unwrap_or(len as u64)
}
