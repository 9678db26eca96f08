use serde::{Deserialize, Serialize};

/// Identity payload issued by the authority for one sign-in attempt.
///
/// The authority includes `full_name` and `email` only on the user's first
/// successful authorization with this application and never resends them.
/// Whatever consumes a first-time identity must persist or forward those
/// fields immediately; they are unrecoverable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable unique identifier assigned by the authority.
    pub identifier: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Opaque token for backend verification; never inspected locally.
    pub identity_token: Vec<u8>,
    /// Opaque one-time code for backend verification; never inspected locally.
    pub authorization_code: Vec<u8>,
}

impl UserIdentity {
    /// A returning-user identity: identifier and opaque material only.
    pub fn returning(
        identifier: impl Into<String>,
        identity_token: Vec<u8>,
        authorization_code: Vec<u8>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            full_name: None,
            email: None,
            identity_token,
            authorization_code,
        }
    }

    /// A first-authorization identity carrying the one-time profile fields.
    pub fn first_authorization(
        identifier: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        identity_token: Vec<u8>,
        authorization_code: Vec<u8>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            identity_token,
            authorization_code,
        }
    }
}
