//! Schema migrations for the lookup cache

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

pub use sqlx::migrate::MigrateError;

/// Cache schema, embedded from `migrations/` at build time
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Bring the `spoonacular_cache` schema up to date
///
/// Versions are tracked in `_sqlx_migrations`; already-applied versions are
/// skipped, so every service instance may call this on startup.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(latest, "Applying lookup cache migrations");
    MIGRATOR.run(pool).await?;
    info!(latest, "Lookup cache schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_table_migration_embedded() {
        let migrations: Vec<_> = MIGRATOR.iter().collect();
        assert_eq!(migrations.len(), 1);
        assert_eq!(migrations[0].version, 1);
        assert_eq!(migrations[0].description, "create spoonacular cache");
        assert!(migrations[0].sql.contains("spoonacular_cache"));
    }
}
