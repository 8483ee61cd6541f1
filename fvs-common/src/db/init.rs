//! Database initialization
//!
//! Creates the `Forms-data` SQLite database on first run and makes sure the
//! submissions collection exists. Safe to run on every startup.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

use super::submissions::SUBMISSIONS_COLLECTION;
use crate::Result;

/// Open (creating if needed) the database and its schema
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL lets concurrent submissions write without blocking readers
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create the submissions collection (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            document TEXT NOT NULL,
            submitted_at TEXT NOT NULL
        )
        "#,
        SUBMISSIONS_COLLECTION
    );
    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}
