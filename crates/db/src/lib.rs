//! Favorites persistence.
//!
//! Two [`swfav_core::store::FavoriteStore`] implementations: [`PgFavoriteStore`]
//! over PostgreSQL and [`MemoryFavoriteStore`] held in process memory.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod pg;

pub use memory::MemoryFavoriteStore;
pub use pg::PgFavoriteStore;

pub type DbPool = sqlx::PgPool;

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

/// Apply the bundled migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
