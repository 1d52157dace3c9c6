//! Database access for restaurants and menu items.
//!
//! Exposes the connection pool helpers used at startup plus the model and
//! repository modules.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default page size for list queries.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 1000;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("../../db/migrations");
    tracing::debug!(count = migrator.iter().count(), "Applying migrations");
    migrator.run(pool).await
}

/// Clamp a requested page size to `0..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
