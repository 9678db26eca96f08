use crate::Claim;

use serde::{Deserialize, Serialize};

/// Outgoing authorization request for a single sign-in attempt.
///
/// Immutable once built; submitted to the authority and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRequest {
    requested_claims: Vec<Claim>,
}

impl IdentityRequest {
    /// The standard first-run request: ask for the user's name and email.
    pub fn with_profile_claims() -> Self {
        Self {
            requested_claims: vec![Claim::FullName, Claim::Email],
        }
    }

    /// Request an explicit set of claims. Duplicates are dropped.
    pub fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let mut requested_claims: Vec<Claim> = Vec::new();
        for claim in claims {
            if !requested_claims.contains(&claim) {
                requested_claims.push(claim);
            }
        }
        Self { requested_claims }
    }

    pub fn requested_claims(&self) -> &[Claim] {
        &self.requested_claims
    }

    pub fn requests(&self, claim: Claim) -> bool {
        self.requested_claims.contains(&claim)
    }
}
