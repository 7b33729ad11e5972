//! Applies the lookup cache migrations to `DATABASE_URL` and exits
//!
//! Lookup services also migrate on startup; this binary lets a deploy step
//! do it once, before any service instance starts.

use std::process::ExitCode;

use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("larder_migrate=info,larder_db=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_stackdriver::layer())
        .init();

    let Some(database_url) = std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
    else {
        error!("DATABASE_URL environment variable is required");
        return ExitCode::FAILURE;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = larder_db::migrate::migrate(&pool).await {
        error!(error = %e, "Migration failed");
        return ExitCode::FAILURE;
    }

    pool.close().await;
    info!("Lookup cache schema is up to date");
    ExitCode::SUCCESS
}
