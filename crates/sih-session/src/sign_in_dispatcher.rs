use crate::{RegistrationNotifier, Result, SignInError};

use std::sync::Arc;

use sih_core::{
    AuthorizationOutcome, ClassifiedIdentity, CredentialRecord, CredentialStore,
    NewAccountIdentity, RegistrationBackend, RegistrationError, ReturningIdentity,
};

/// Terminal result of a dispatched sign-in.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    /// First sign-in: record persisted locally and registered remotely.
    Registered(CredentialRecord),
    /// Returning user resumed from the local record.
    Resumed(CredentialRecord),
    /// Password credential accepted and deliberately ignored.
    Ignored,
}

/// Routes one authorization outcome to the new-account or existing-account
/// branch and fires the notifier exactly once per dispatch.
pub struct SignInDispatcher {
    store: Arc<dyn CredentialStore>,
    backend: Arc<dyn RegistrationBackend>,
}

impl SignInDispatcher {
    pub fn new(store: Arc<dyn CredentialStore>, backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { store, backend }
    }

    /// Consume one outcome. A `Failure` outcome releases the notifier
    /// unfired; every other outcome resolves it.
    pub async fn dispatch(
        &self,
        outcome: AuthorizationOutcome,
        notifier: RegistrationNotifier,
    ) -> Result<SignInOutcome> {
        let result = match outcome {
            AuthorizationOutcome::Credential(identity) => {
                match ClassifiedIdentity::classify(identity) {
                    ClassifiedIdentity::NewAccount(identity) => {
                        self.register_new_account(&identity).await
                    }
                    ClassifiedIdentity::Returning(identity) => {
                        self.resume_existing_account(&identity).await
                    }
                }
            }
            AuthorizationOutcome::Password(credential) => {
                log::info!("Ignoring password credential for '{}'", credential.user);
                Ok(SignInOutcome::Ignored)
            }
            AuthorizationOutcome::Failure(reason) => {
                notifier.release();
                return Err(SignInError::denied(reason));
            }
        };

        let succeeded = matches!(
            result,
            Ok(SignInOutcome::Registered(_)) | Ok(SignInOutcome::Resumed(_))
        );
        notifier.notify(succeeded);

        result
    }

    async fn register_new_account(&self, identity: &NewAccountIdentity) -> Result<SignInOutcome> {
        let record = CredentialRecord::from(identity);

        // The authority sends the profile fields exactly once; persist them
        // before anything downstream can fail.
        self.store
            .store(&record)
            .await
            .map_err(|e| SignInError::storage(e))?;

        let registered = match self.backend.register(identity).await {
            Ok(registered) => registered,
            Err(source) => {
                self.roll_back_record(&identity.identifier).await;
                return Err(SignInError::registration(source));
            }
        };

        if !registered {
            self.roll_back_record(&identity.identifier).await;
            return Err(SignInError::registration(RegistrationError::server(
                "REGISTRATION_DECLINED",
                "backend declined the registration",
            )));
        }

        log::info!("Registered new account for '{}'", identity.identifier);

        Ok(SignInOutcome::Registered(record))
    }

    async fn resume_existing_account(&self, identity: &ReturningIdentity) -> Result<SignInOutcome> {
        let record = self
            .store
            .lookup(&identity.identifier)
            .await
            .map_err(|e| SignInError::storage(e))?;

        match record {
            Some(record) => {
                log::info!("Resuming session for '{}'", identity.identifier);
                Ok(SignInOutcome::Resumed(record))
            }
            None => Err(SignInError::unknown_credential(&identity.identifier)),
        }
    }

    // A local record without a backend account strands the user half
    // registered; undo the write so the next attempt starts clean.
    async fn roll_back_record(&self, identifier: &str) {
        if let Err(e) = self.store.remove(identifier).await {
            log::warn!(
                "Failed to roll back credential record for '{}': {}",
                identifier,
                e
            );
        }
    }
}
