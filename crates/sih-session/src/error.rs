use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use sih_core::{AuthorizationFailure, RegistrationError, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignInError {
    #[error("Authorization denied: {reason} {location}")]
    AuthorizationDenied {
        reason: AuthorizationFailure,
        location: ErrorLocation,
    },

    #[error("Credential storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Backend registration failed: {source} {location}")]
    Registration {
        #[source]
        source: RegistrationError,
        location: ErrorLocation,
    },

    #[error("No local credential record for '{identifier}' {location}")]
    UnknownCredential {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("A sign-in attempt is already in progress {location}")]
    AlreadyInProgress { location: ErrorLocation },

    #[error("Authority abandoned the session without an outcome {location}")]
    SessionAbandoned { location: ErrorLocation },

    #[error("Authority did not respond within {timeout_secs}s {location}")]
    TimedOut {
        timeout_secs: u64,
        location: ErrorLocation,
    },
}

impl SignInError {
    #[track_caller]
    pub fn denied(reason: AuthorizationFailure) -> Self {
        Self::AuthorizationDenied {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registration(source: RegistrationError) -> Self {
        Self::Registration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_credential<S: Into<String>>(identifier: S) -> Self {
        Self::UnknownCredential {
            identifier: identifier.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_in_progress() -> Self {
        Self::AlreadyInProgress {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn abandoned() -> Self {
        Self::SessionAbandoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timed_out(timeout: Duration) -> Self {
        Self::TimedOut {
            timeout_secs: timeout.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SignInError>;
