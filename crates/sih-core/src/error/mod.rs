use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures raised by a [`crate::CredentialStore`] implementation.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Credential store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored credential for '{identifier}' is corrupted: {message} {location}")]
    Corrupted {
        identifier: String,
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted<I: Into<String>, S: Into<String>>(identifier: I, message: S) -> Self {
        Self::Corrupted {
            identifier: identifier.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failures raised by a [`crate::RegistrationBackend`] implementation.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Network error during registration: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Registration rejected by server: {message} (code: {code}) {location}")]
    Server {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed registration response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl RegistrationError {
    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server<C: Into<String>, S: Into<String>>(code: C, message: S) -> Self {
        Self::Server {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
