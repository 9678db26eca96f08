use crate::{PasswordCredential, UserIdentity};

use std::fmt;

/// Terminal result of one authorization session.
///
/// The authority produces exactly one of these per session; the dispatcher
/// consumes it exactly once.
#[derive(Debug, Clone)]
pub enum AuthorizationOutcome {
    /// The authority authenticated the user and issued an identity.
    Credential(UserIdentity),
    /// A stored password credential; accepted, never dispatched.
    Password(PasswordCredential),
    /// The authority refused or aborted the attempt.
    Failure(AuthorizationFailure),
}

/// Reason the authority terminated a session without a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationFailure {
    /// The user dismissed the authorization prompt.
    Cancelled,
    /// No provider handled the request.
    NotHandled,
    /// The authority's response could not be interpreted.
    InvalidResponse,
    /// Any other authority-reported failure.
    Failed(String),
}

impl fmt::Display for AuthorizationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "user cancelled the authorization"),
            Self::NotHandled => write!(f, "no provider handled the request"),
            Self::InvalidResponse => write!(f, "authority response was invalid"),
            Self::Failed(reason) => write!(f, "{}", reason),
        }
    }
}
