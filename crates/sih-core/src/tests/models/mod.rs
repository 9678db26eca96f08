mod classified_identity;
mod credential_record;
mod identity_request;
