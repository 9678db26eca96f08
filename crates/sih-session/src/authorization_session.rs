use crate::{IdentityAuthority, Result, SignInError};

use std::time::Duration;

use sih_core::{AuthorizationOutcome, IdentityRequest};
use tokio::sync::oneshot;

/// Sending half of one authorization session.
///
/// `resolve` consumes the resolver, so a second resolution is
/// unrepresentable. A resolution arriving after cancellation is discarded
/// silently.
pub struct OutcomeResolver {
    tx: oneshot::Sender<AuthorizationOutcome>,
}

impl OutcomeResolver {
    pub fn resolve(self, outcome: AuthorizationOutcome) {
        if self.tx.send(outcome).is_err() {
            log::debug!("Authorization outcome arrived after the session was cancelled");
        }
    }
}

/// One in-flight sign-in attempt against an identity authority.
///
/// Owned by whoever initiated the sign-in and released when the single
/// outcome arrives; no delegate state survives the attempt.
pub struct AuthorizationSession {
    rx: oneshot::Receiver<AuthorizationOutcome>,
}

impl AuthorizationSession {
    /// Submit `request` to `authority`. The returned session yields exactly
    /// one outcome.
    pub fn begin(authority: &dyn IdentityAuthority, request: IdentityRequest) -> Self {
        let (tx, rx) = oneshot::channel();
        authority.begin(request, OutcomeResolver { tx });
        Self { rx }
    }

    /// Await the authority's single terminal outcome.
    pub async fn outcome(self) -> Result<AuthorizationOutcome> {
        self.rx.await.map_err(|_| SignInError::abandoned())
    }

    /// Await the outcome, giving up after `timeout`.
    pub async fn outcome_with_timeout(self, timeout: Duration) -> Result<AuthorizationOutcome> {
        match tokio::time::timeout(timeout, self.rx).await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(_)) => Err(SignInError::abandoned()),
            Err(_) => Err(SignInError::timed_out(timeout)),
        }
    }

    /// Abandon the attempt. A late resolve is discarded; no waiter leaks.
    pub fn cancel(self) {
        drop(self.rx);
    }
}
