//! Cache store: opaque key -> JSON payload + expiry
//!
//! Stores know nothing about what a payload means. Freshness is decided by
//! [`is_fresh`], not by whether a row exists.

use std::fmt::{self, Display};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use moka::future::Cache;
use sqlx::postgres::PgPoolOptions;
use larder_db::migrate::MigrateError;
use sqlx::PgPool;
use tracing::info;

#[derive(Debug)]
pub enum CacheStoreError {
    Database(sqlx::Error),
    /// Schema migrations failed while connecting
    Migration(MigrateError),
    Serialization(serde_json::Error),
    /// Store-specific failure with no richer source
    Unavailable(String),
}

impl Display for CacheStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(e) => write!(f, "Database error: {e}"),
            Self::Migration(e) => write!(f, "Migration error: {e}"),
            Self::Serialization(e) => write!(f, "Serialization error: {e}"),
            Self::Unavailable(msg) => write!(f, "Cache store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CacheStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            Self::Migration(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<sqlx::Error> for CacheStoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e)
    }
}

impl From<MigrateError> for CacheStoreError {
    fn from(e: MigrateError) -> Self {
        Self::Migration(e)
    }
}

impl From<serde_json::Error> for CacheStoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// One cached lookup result
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    pub payload: serde_json::Value,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        is_fresh(self.expires_at, now)
    }
}

/// `expires_at` strictly after `now`; a missing expiry is never fresh
pub fn is_fresh(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    matches!(expires_at, Some(at) if at > now)
}

/// Absolute expiry for a TTL starting at `now`, saturating at the max timestamp
pub fn expires_at(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Keyed store with get/upsert-with-expiry
///
/// Implementations handle their own concurrency; concurrent `set`s for one key
/// are last-writer-wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// The entry for `key`, fresh or not
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheStoreError>;

    /// Insert or overwrite payload and expiry (`now + ttl`)
    async fn set(
        &self,
        key: &str,
        payload: &serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheStoreError>;
}

/// PostgreSQL-backed store over the `spoonacular_cache` table
pub struct PgCacheStore {
    pool: PgPool,
}

impl PgCacheStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for PgCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheStoreError> {
        let row = larder_db::api_cache::get_entry(&self.pool, key).await?;
        Ok(row.map(|r| CacheEntry {
            key: r.cache_key,
            payload: r.results,
            expires_at: r.expires_at,
        }))
    }

    async fn set(
        &self,
        key: &str,
        payload: &serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheStoreError> {
        let expires_at = expires_at(Utc::now(), ttl);
        larder_db::api_cache::upsert_entry(&self.pool, key, payload, expires_at).await?;
        Ok(())
    }
}

/// Process-local store for development and tests
///
/// Unbounded; entries are never evicted, only judged stale.
#[derive(Clone)]
pub struct MemoryCacheStore {
    entries: Cache<String, CacheEntry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Put an entry with an explicit expiry
    pub async fn insert(&self, entry: CacheEntry) {
        self.entries.insert(entry.key.clone(), entry).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Flush moka's pending bookkeeping so `entry_count` is exact
    pub async fn sync(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheStoreError> {
        Ok(self.entries.get(key).await)
    }

    async fn set(
        &self,
        key: &str,
        payload: &serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheStoreError> {
        let entry = CacheEntry {
            key: key.to_string(),
            payload: payload.clone(),
            expires_at: Some(expires_at(Utc::now(), ttl)),
        };
        self.entries.insert(key.to_string(), entry).await;
        Ok(())
    }
}

/// Postgres store when a database URL is configured (migrations applied),
/// otherwise an in-memory store
pub async fn connect_store(
    database_url: Option<&str>,
) -> Result<Arc<dyn CacheStore>, CacheStoreError> {
    match database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            larder_db::migrate::migrate(&pool).await?;
            info!("Using PostgreSQL cache store");
            Ok(Arc::new(PgCacheStore::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory cache store");
            Ok(Arc::new(MemoryCacheStore::new()))
        }
    }
}
