//! Storage gateway and data access for the SWAPI dataset.
//!
//! [`Database`] owns the SQLite connection pool together with the single
//! process-wide write lock. Every create, update and delete in
//! [`repositories`] holds that lock for its whole duration; reads never
//! take it.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::{Mutex, MutexGuard};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Table layout of the dataset file, created only where missing.
const SCHEMA: &str = include_str!("../schema.sql");

/// Shared handle to the backing store.
///
/// Cheap to clone: the pool and the lock are both reference counted, so
/// every clone serializes writes against the same lock.
#[derive(Debug, Clone)]
pub struct Database {
    pool: DbPool,
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    /// Open the dataset file at `path`, creating it if it does not exist.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::with_options(options, max_connections).await
    }

    /// Open a database from a full sqlx URL such as `sqlite://swapi.dat?mode=rwc`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?;
        Self::with_options(options, max_connections).await
    }

    async fn with_options(
        options: SqliteConnectOptions,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an already configured pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Acquire exclusive write access.
    ///
    /// The lock is released when the guard is dropped, which covers every
    /// early return in the caller.
    pub async fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Create any of the dataset tables that do not exist yet. Existing
    /// tables are left untouched.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Verify the store answers queries.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
