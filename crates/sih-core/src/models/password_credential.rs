use serde::{Deserialize, Serialize};

/// A stored username/password credential.
///
/// The authority's surface can return one of these instead of an identity;
/// the handshake accepts it and deliberately does nothing with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub user: String,
    pub password: String,
}
