use std::path::Path;

use async_trait::async_trait;
use chrono::DateTime;
use sih_core::{CredentialRecord, CredentialStore, StorageError};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// SQLite-backed credential store.
///
/// One row per authority identifier; `INSERT OR REPLACE` keeps writes atomic
/// per key.
pub struct SqliteKeychain {
    pool: SqlitePool,
}

impl SqliteKeychain {
    /// Open (or create) the keychain database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                StorageError::backend(format!("Failed to open keychain database: {}", e))
            })?;

        Self::initialize(pool).await
    }

    /// In-memory keychain. Single connection so the database outlives
    /// individual pool checkouts.
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .map_err(|e| {
                StorageError::backend(format!("Failed to open in-memory keychain: {}", e))
            })?;

        Self::initialize(pool).await
    }

    async fn initialize(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::backend(format!("Migration failed: {}", e)))?;

        Ok(Self { pool })
    }

    fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<CredentialRecord, StorageError> {
        let identifier: String = row
            .try_get("identifier")
            .map_err(|e| StorageError::backend(format!("Failed to read row: {}", e)))?;
        let full_name: String = row
            .try_get("full_name")
            .map_err(|e| StorageError::corrupted(&identifier, e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| StorageError::corrupted(&identifier, e.to_string()))?;
        let created_secs: i64 = row
            .try_get("created_at")
            .map_err(|e| StorageError::corrupted(&identifier, e.to_string()))?;
        let updated_secs: i64 = row
            .try_get("updated_at")
            .map_err(|e| StorageError::corrupted(&identifier, e.to_string()))?;

        let created_at = DateTime::from_timestamp(created_secs, 0).ok_or_else(|| {
            StorageError::corrupted(&identifier, "created_at holds an invalid timestamp")
        })?;
        let updated_at = DateTime::from_timestamp(updated_secs, 0).ok_or_else(|| {
            StorageError::corrupted(&identifier, "updated_at holds an invalid timestamp")
        })?;

        Ok(CredentialRecord {
            identifier,
            full_name,
            email,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl CredentialStore for SqliteKeychain {
    async fn store(&self, record: &CredentialRecord) -> Result<(), StorageError> {
        let created_at = record.created_at.timestamp();
        let updated_at = record.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT OR REPLACE INTO sih_credentials (
                  identifier, full_name, email, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&record.identifier)
        .bind(&record.full_name)
        .bind(&record.email)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::backend(format!("Failed to store credential: {}", e)))?;

        log::debug!("Stored credential record for '{}'", record.identifier);

        Ok(())
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>, StorageError> {
        let row = sqlx::query(
            r#"
              SELECT identifier, full_name, email, created_at, updated_at
              FROM sih_credentials
              WHERE identifier = ?
              "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::backend(format!("Failed to look up credential: {}", e)))?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn remove(&self, identifier: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM sih_credentials WHERE identifier = ?")
            .bind(identifier)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::backend(format!("Failed to remove credential: {}", e)))?;

        Ok(())
    }
}
