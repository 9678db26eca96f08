use async_trait::async_trait;
use sih_core::{NewAccountIdentity, RegistrationBackend, RegistrationError};

/// Accepts every registration locally when no backend URL is configured.
pub struct OfflineBackend;

#[async_trait]
impl RegistrationBackend for OfflineBackend {
    async fn register(&self, identity: &NewAccountIdentity) -> Result<bool, RegistrationError> {
        log::info!(
            "No backend configured; accepting registration for '{}' locally",
            identity.identifier
        );
        Ok(true)
    }
}
