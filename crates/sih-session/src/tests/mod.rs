
use crate::{IdentityAuthority, OutcomeResolver};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use sih_core::{
    AuthorizationOutcome, CredentialRecord, CredentialStore, IdentityRequest, NewAccountIdentity,
    RegistrationBackend, RegistrationError, StorageError, UserIdentity,
};

pub(crate) fn first_time_identity() -> UserIdentity {
    UserIdentity::first_authorization(
        "u1",
        "Ray Wenderlich",
        "ray@example.com",
        b"token".to_vec(),
        b"code".to_vec(),
    )
}

pub(crate) fn returning_identity() -> UserIdentity {
    UserIdentity::returning("u1", b"token".to_vec(), b"code".to_vec())
}

/// Credential store fake with optional write failure and call counters.
pub(crate) struct FakeStore {
    records: Mutex<HashMap<String, CredentialRecord>>,
    fail_writes: bool,
    pub store_calls: AtomicU32,
    pub remove_calls: AtomicU32,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail_writes: false,
            store_calls: AtomicU32::new(0),
            remove_calls: AtomicU32::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn seed(self, record: CredentialRecord) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(record.identifier.clone(), record);
        self
    }

    pub fn record(&self, identifier: &str) -> Option<CredentialRecord> {
        self.records.lock().unwrap().get(identifier).cloned()
    }
}

#[async_trait]
impl CredentialStore for FakeStore {
    async fn store(&self, record: &CredentialRecord) -> Result<(), StorageError> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::backend("keychain unavailable"));
        }
        self.records
            .lock()
            .unwrap()
            .insert(record.identifier.clone(), record.clone());
        Ok(())
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>, StorageError> {
        Ok(self.records.lock().unwrap().get(identifier).cloned())
    }

    async fn remove(&self, identifier: &str) -> Result<(), StorageError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().remove(identifier);
        Ok(())
    }
}

pub(crate) enum BackendScript {
    Accept,
    Decline,
    NetworkFailure,
}

/// Registration backend fake driven by a fixed script.
pub(crate) struct FakeBackend {
    script: BackendScript,
    pub calls: AtomicU32,
}

impl FakeBackend {
    pub fn accepting() -> Self {
        Self::with(BackendScript::Accept)
    }

    pub fn with(script: BackendScript) -> Self {
        Self {
            script,
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl RegistrationBackend for FakeBackend {
    async fn register(&self, _identity: &NewAccountIdentity) -> Result<bool, RegistrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            BackendScript::Accept => Ok(true),
            BackendScript::Decline => Ok(false),
            BackendScript::NetworkFailure => Err(RegistrationError::network("connection refused")),
        }
    }
}

/// Authority that resolves synchronously with a canned outcome.
pub(crate) struct ImmediateAuthority {
    outcome: Mutex<Option<AuthorizationOutcome>>,
}

impl ImmediateAuthority {
    pub fn with(outcome: AuthorizationOutcome) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
        }
    }
}

impl IdentityAuthority for ImmediateAuthority {
    fn begin(&self, _request: IdentityRequest, resolver: OutcomeResolver) {
        let outcome = self
            .outcome
            .lock()
            .unwrap()
            .take()
            .expect("outcome already consumed");
        resolver.resolve(outcome);
    }
}

/// Authority that drops the resolver without resolving.
pub(crate) struct AbandoningAuthority;

impl IdentityAuthority for AbandoningAuthority {
    fn begin(&self, _request: IdentityRequest, resolver: OutcomeResolver) {
        drop(resolver);
    }
}

/// Authority that parks the resolver for the test to fire later (or never).
pub(crate) struct HoldingAuthority {
    pub held: Mutex<Option<OutcomeResolver>>,
}

impl HoldingAuthority {
    pub fn new() -> Self {
        Self {
            held: Mutex::new(None),
        }
    }
}

impl IdentityAuthority for HoldingAuthority {
    fn begin(&self, _request: IdentityRequest, resolver: OutcomeResolver) {
        *self.held.lock().unwrap() = Some(resolver);
    }
}
