use crate::{NewAccountIdentity, RegistrationError};

use async_trait::async_trait;

/// Remote account-registration endpoint.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Register a first-time identity, forwarding the opaque token and
    /// authorization code for server-side verification.
    ///
    /// `Ok(false)` means the server processed the request but declined it.
    async fn register(&self, identity: &NewAccountIdentity) -> Result<bool, RegistrationError>;
}
