// Spoonacular response cache rows. Freshness is decided by callers from
// `expires_at`; these functions never filter on it.

use chrono::{DateTime, Utc};

use crate::types::ApiCacheRow;

/// Get a cache row by key, whether or not it has expired
pub async fn get_entry(
    executor: impl sqlx::PgExecutor<'_>,
    cache_key: &str,
) -> Result<Option<ApiCacheRow>, sqlx::Error> {
    sqlx::query_as::<_, ApiCacheRow>(
        "SELECT cache_key, results, expires_at FROM spoonacular_cache WHERE cache_key = $1",
    )
    .bind(cache_key)
    .fetch_optional(executor)
    .await
}

/// Insert or overwrite a cache row (last writer wins)
pub async fn upsert_entry(
    executor: impl sqlx::PgExecutor<'_>,
    cache_key: &str,
    results: &serde_json::Value,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO spoonacular_cache (cache_key, results, expires_at, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (cache_key) DO UPDATE
        SET results = EXCLUDED.results, expires_at = EXCLUDED.expires_at, updated_at = NOW()
        "#,
    )
    .bind(cache_key)
    .bind(results)
    .bind(expires_at)
    .execute(executor)
    .await?;
    Ok(())
}
