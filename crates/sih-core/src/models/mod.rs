pub mod authorization_outcome;
pub mod claim;
pub mod classified_identity;
pub mod credential_record;
pub mod identity_request;
pub mod password_credential;
pub mod user_identity;
