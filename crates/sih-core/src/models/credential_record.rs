use crate::NewAccountIdentity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable local projection of a first sign-in, keyed by identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialRecord {
    pub identifier: String,
    pub full_name: String,
    pub email: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(
        identifier: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            identifier: identifier.into(),
            full_name: full_name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&NewAccountIdentity> for CredentialRecord {
    fn from(identity: &NewAccountIdentity) -> Self {
        Self::new(
            identity.identifier.clone(),
            identity.full_name.clone(),
            identity.email.clone(),
        )
    }
}
