//! Storage implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};

pub mod conflict;
pub mod memory;
pub mod schema;
pub mod snapshot_store;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemorySnapshotStore;
pub use snapshot_store::SnapshotStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSnapshotStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresSnapshotStore;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// An absent snapshot is not an error: reads return `Ok(None)`. A lost
/// write race is not an error either: `persist` returns `Ok(false)`.
/// These variants cover the failures that remain.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("State encode error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Blob decode error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Initialize a snapshot store based on configuration.
///
/// Returns the SnapshotStore implementation selected by the configured
/// storage type, with its schema applied where the backend needs one.
pub async fn init_storage(
    config: &StorageConfig,
) -> std::result::Result<Arc<dyn SnapshotStore>, Box<dyn std::error::Error>> {
    match config.storage_type {
        #[cfg(feature = "sqlite")]
        StorageType::Sqlite => {
            info!("Storage: sqlite at {}", config.sqlite.path);

            if let Some(parent) = std::path::Path::new(&config.sqlite.path).parent() {
                std::fs::create_dir_all(parent)?;
            }

            let pool =
                sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.sqlite.path))
                    .await?;

            let store = SqliteSnapshotStore::new(pool);
            store.init().await?;

            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite"))]
        StorageType::Sqlite => {
            tracing::error!("SQLite storage requested but 'sqlite' feature is not enabled");
            Err("SQLite feature not enabled".into())
        }
        #[cfg(feature = "postgres")]
        StorageType::Postgres => {
            info!("Storage: postgres");

            let pool = sqlx::PgPool::connect(&config.postgres.uri).await?;

            let store = PostgresSnapshotStore::new(pool);
            store.init().await?;

            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        StorageType::Postgres => {
            tracing::error!("PostgreSQL storage requested but 'postgres' feature is not enabled");
            Err("PostgreSQL feature not enabled".into())
        }
        StorageType::Memory => {
            info!("Storage: memory (snapshots are lost on restart)");
            Ok(Arc::new(MemorySnapshotStore::new()))
        }
    }
}
