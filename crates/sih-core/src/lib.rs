pub mod backend;
pub mod error;
pub mod models;
pub mod store;

pub use backend::RegistrationBackend;
pub use error::{RegistrationError, StorageError};
pub use models::authorization_outcome::{AuthorizationFailure, AuthorizationOutcome};
pub use models::claim::Claim;
pub use models::classified_identity::{ClassifiedIdentity, NewAccountIdentity, ReturningIdentity};
pub use models::credential_record::CredentialRecord;
pub use models::identity_request::IdentityRequest;
pub use models::password_credential::PasswordCredential;
pub use models::user_identity::UserIdentity;
pub use store::CredentialStore;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
