use crate::{DbError, Result};

use error_location::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl DatabaseOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Opens the SQLite file backing the tabular data service.
pub struct Database;

impl Database {
    pub async fn open(options: &DatabaseOptions) -> Result<SqlitePool> {
        Self::ensure_parent_dir(&options.path).await?;

        let connect_options = SqliteConnectOptions::new()
            .filename(&options.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections.max(1))
            .connect_with(connect_options)
            .await?;

        Self::run_migrations(&pool).await?;

        log::info!(
            "Database ready at {} (max {} connections)",
            options.path.display(),
            options.max_connections
        );

        Ok(pool)
    }

    /// Single-connection in-memory database with the schema applied.
    pub async fn open_in_memory() -> Result<SqlitePool> {
        let connect_options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        // Every connection to :memory: is a separate database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options)
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(pool)
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    async fn ensure_parent_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DbError::Initialization {
                        message: format!(
                            "Failed to create database directory {}: {}",
                            parent.display(),
                            e
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }
        }
        Ok(())
    }
}
