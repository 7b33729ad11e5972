use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `spoonacular_cache` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApiCacheRow {
    pub cache_key: String,
    /// Normalized lookup result, stored as JSON
    pub results: serde_json::Value,
    /// `None` or a past timestamp means the row is not fresh
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_api_cache_row_serialization() {
        let row = ApiCacheRow {
            cache_key: "groceries:abc123".to_string(),
            results: serde_json::json!({ "results": [], "totalResults": 0 }),
            expires_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("groceries:abc123"));
        assert!(json.contains("2026-01-01T12:00:00Z"));

        let back: ApiCacheRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cache_key, row.cache_key);
        assert_eq!(back.expires_at, row.expires_at);
    }
}
