use crate::{
    AuthorizationSession, FlowConfig, IdentityAuthority, RegistrationNotifier, Result,
    SignInDispatcher, SignInError, SignInOutcome,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sih_core::{AuthorizationOutcome, CredentialStore, IdentityRequest, RegistrationBackend};

/// End-to-end sign-in: session, outcome, dispatch.
///
/// One attempt at a time; a second call while the first is in flight is
/// rejected instead of racing it.
pub struct SignInFlow {
    dispatcher: SignInDispatcher,
    config: FlowConfig,
    in_progress: AtomicBool,
}

impl SignInFlow {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        backend: Arc<dyn RegistrationBackend>,
        config: FlowConfig,
    ) -> Self {
        Self {
            dispatcher: SignInDispatcher::new(store, backend),
            config,
            in_progress: AtomicBool::new(false),
        }
    }

    /// Run one sign-in attempt against `authority`.
    ///
    /// The notifier fires exactly once if the session reaches dispatch and
    /// is released unfired otherwise; the typed result carries the detail
    /// the boolean cannot.
    pub async fn sign_in(
        &self,
        authority: &dyn IdentityAuthority,
        request: IdentityRequest,
        notifier: RegistrationNotifier,
    ) -> Result<SignInOutcome> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            notifier.release();
            return Err(SignInError::already_in_progress());
        }

        let result = self.run(authority, request, notifier).await;
        self.in_progress.store(false, Ordering::SeqCst);

        result
    }

    async fn run(
        &self,
        authority: &dyn IdentityAuthority,
        request: IdentityRequest,
        notifier: RegistrationNotifier,
    ) -> Result<SignInOutcome> {
        let session = AuthorizationSession::begin(authority, request);

        let outcome = match self.config.authority_timeout() {
            Some(timeout) => session.outcome_with_timeout(timeout).await,
            None => session.outcome().await,
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                // The session never produced a credential; the notifier
                // contract only covers dispatched sessions.
                notifier.release();
                return Err(e);
            }
        };

        if let AuthorizationOutcome::Failure(reason) = outcome {
            log::info!("Authorization failed before dispatch: {}", reason);
            notifier.release();
            return Err(SignInError::denied(reason));
        }

        self.dispatcher.dispatch(outcome, notifier).await
    }
}
