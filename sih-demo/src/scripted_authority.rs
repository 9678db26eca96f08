use std::sync::Mutex;
use std::time::Duration;

use sih_core::{AuthorizationFailure, AuthorizationOutcome, IdentityRequest, UserIdentity};
use sih_session::{IdentityAuthority, OutcomeResolver};

/// Stand-in for the platform authorization prompt.
///
/// Resolves the session after a short delay with a canned identity, or with
/// a cancellation when none was scripted.
pub struct ScriptedAuthority {
    identity: Mutex<Option<UserIdentity>>,
    delay: Duration,
}

impl ScriptedAuthority {
    pub fn new(identity: Option<UserIdentity>, delay: Duration) -> Self {
        Self {
            identity: Mutex::new(identity),
            delay,
        }
    }
}

impl IdentityAuthority for ScriptedAuthority {
    fn begin(&self, request: IdentityRequest, resolver: OutcomeResolver) {
        let claims: Vec<&str> = request
            .requested_claims()
            .iter()
            .map(|claim| claim.as_str())
            .collect();
        log::info!("Authorization prompt shown; requested claims: {:?}", claims);

        let identity = self.identity.lock().unwrap().take();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match identity {
                Some(identity) => resolver.resolve(AuthorizationOutcome::Credential(identity)),
                None => {
                    resolver.resolve(AuthorizationOutcome::Failure(AuthorizationFailure::Cancelled))
                }
            }
        });
    }
}
