use crate::{CredentialRecord, StorageError};

use async_trait::async_trait;

/// Durable local credential storage, keyed by authority identifier.
///
/// Writes must be atomic per identifier; no cross-key transactions are
/// required. Storing an identifier that already exists replaces the record.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn store(&self, record: &CredentialRecord) -> Result<(), StorageError>;

    async fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>, StorageError>;

    async fn remove(&self, identifier: &str) -> Result<(), StorageError>;
}
