//! SQLite connection pool setup.
//!
//! The listings table is created by the embedded migrations, which use
//! `CREATE TABLE IF NOT EXISTS` so an existing database file is picked up
//! unchanged.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Connect to the database at `database_url`.
///
/// # Example URLs
/// - `sqlite://listings.db?mode=rwc` - File-based, created if missing
/// - `sqlite::memory:` - In-memory (see [`connect_in_memory`])
pub async fn connect_database(database_url: &str) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database at {}", database_url))
}

/// Connect to a fresh in-memory database (for testing).
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("Failed to open in-memory database")
}

/// Run the embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")
}
