use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sih_core::{CredentialRecord, CredentialStore, StorageError};
use tokio::sync::RwLock;

/// In-memory credential store for tests and demos.
#[derive(Clone, Default)]
pub struct MemoryKeychain {
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl MemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryKeychain {
    async fn store(&self, record: &CredentialRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(record.identifier.clone(), record.clone());
        Ok(())
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(identifier).cloned())
    }

    async fn remove(&self, identifier: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.remove(identifier);
        Ok(())
    }
}
