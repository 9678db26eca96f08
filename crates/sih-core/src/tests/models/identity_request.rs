use crate::{Claim, IdentityRequest};

#[test]
fn test_profile_request_asks_for_name_and_email() {
    let request = IdentityRequest::with_profile_claims();

    assert!(request.requests(Claim::FullName));
    assert!(request.requests(Claim::Email));
}

#[test]
fn test_explicit_claims_deduplicated() {
    let request = IdentityRequest::with_claims([Claim::Email, Claim::Email, Claim::FullName]);

    assert_eq!(request.requested_claims().len(), 2);
    assert_eq!(request.requested_claims()[0], Claim::Email);
}

#[test]
fn test_empty_request_asks_for_nothing() {
    let request = IdentityRequest::with_claims([]);

    assert!(request.requested_claims().is_empty());
    assert!(!request.requests(Claim::FullName));
}
