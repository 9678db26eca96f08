use crate::UserIdentity;

use serde::{Deserialize, Serialize};

/// First sign-in: every profile field present, exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccountIdentity {
    pub identifier: String,
    pub full_name: String,
    pub email: String,
    pub identity_token: Vec<u8>,
    pub authorization_code: Vec<u8>,
}

/// Subsequent sign-in: the authority sends the identifier and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturningIdentity {
    pub identifier: String,
}

/// Shape of an authority credential, decided once at the boundary.
///
/// Downstream code never checks optional fields again; the split happens
/// here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassifiedIdentity {
    NewAccount(NewAccountIdentity),
    Returning(ReturningIdentity),
}

impl ClassifiedIdentity {
    /// The authority marks a first authorization by including both profile
    /// fields. Anything less is a returning user.
    pub fn classify(identity: UserIdentity) -> Self {
        match (identity.full_name, identity.email) {
            (Some(full_name), Some(email)) => Self::NewAccount(NewAccountIdentity {
                identifier: identity.identifier,
                full_name,
                email,
                identity_token: identity.identity_token,
                authorization_code: identity.authorization_code,
            }),
            _ => Self::Returning(ReturningIdentity {
                identifier: identity.identifier,
            }),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::NewAccount(identity) => &identity.identifier,
            Self::Returning(identity) => &identity.identifier,
        }
    }

    pub fn is_new_account(&self) -> bool {
        matches!(self, Self::NewAccount(_))
    }
}
