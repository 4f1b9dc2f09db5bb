//! Database module for unsocial-core.
//!
//! Wraps a sqlx connection pool and applies versioned migrations. SQLite is
//! the default backend; PostgreSQL is available behind the `postgres`
//! feature.

mod object_id;
mod repository;
mod schema;
mod user;

pub use object_id::{generate_id, is_valid_id, ID_HEX_LENGTH};
pub use repository::UserRepository;
pub use schema::MIGRATIONS;
pub use user::{NewUser, User};

use tracing::{debug, info};

use crate::Result;

/// Connection pool type for the active backend.
#[cfg(feature = "sqlite")]
pub type DbPool = sqlx::SqlitePool;

/// Connection pool type for the active backend.
#[cfg(feature = "postgres")]
pub type DbPool = sqlx::PgPool;

// SQL function for the current timestamp, per backend
#[cfg(feature = "sqlite")]
pub const SQL_NOW: &str = "datetime('now')";
#[cfg(feature = "postgres")]
pub const SQL_NOW: &str = "NOW()";

/// Database wrapper for managing connections and migrations.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Connect to the database at the given URL.
    ///
    /// Migrations are applied automatically.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("connecting to database at {url}");
        let pool = DbPool::connect(url).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    #[cfg(feature = "sqlite")]
    pub async fn open_in_memory() -> Result<Self> {
        use sqlx::sqlite::SqlitePoolOptions;

        debug!("opening in-memory database");
        // A single connection, so every query sees the same in-memory store
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close the pool; subsequent queries fail with a system error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        self.ensure_version_table().await?;
        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;
        Ok(version)
    }

    async fn ensure_version_table(&self) -> Result<()> {
        let create = format!(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version     BIGINT PRIMARY KEY,
                applied_at  TEXT NOT NULL DEFAULT ({SQL_NOW})
            )"
        );
        sqlx::query(&create).execute(&self.pool).await?;
        Ok(())
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        let current_version = self.schema_version().await?;
        let migrations = MIGRATIONS;

        if current_version as usize >= migrations.len() {
            debug!("database is up to date (version {current_version})");
            return Ok(());
        }

        info!(
            "migrating database from version {} to {}",
            current_version,
            migrations.len()
        );

        for (i, migration) in migrations.iter().enumerate().skip(current_version as usize) {
            let version = (i + 1) as i64;
            info!("applying migration v{version}");

            let mut tx = self.pool.begin().await?;
            sqlx::raw_sql(migration).execute(&mut *tx).await?;
            sqlx::query("INSERT INTO schema_version (version) VALUES ($1)")
                .bind(version)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}
