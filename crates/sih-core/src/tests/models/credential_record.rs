use crate::{ClassifiedIdentity, CredentialRecord, UserIdentity};

#[test]
fn test_credential_record_new() {
    let record = CredentialRecord::new("u1", "Ray Wenderlich", "ray@example.com");

    assert_eq!(record.identifier, "u1");
    assert_eq!(record.full_name, "Ray Wenderlich");
    assert_eq!(record.email, "ray@example.com");
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_credential_record_from_new_account_identity() {
    let identity = UserIdentity::first_authorization(
        "u1",
        "Ray Wenderlich",
        "ray@example.com",
        b"token".to_vec(),
        b"code".to_vec(),
    );

    let ClassifiedIdentity::NewAccount(identity) = ClassifiedIdentity::classify(identity) else {
        panic!("expected new-account classification");
    };
    let record = CredentialRecord::from(&identity);

    assert_eq!(record.identifier, "u1");
    assert_eq!(record.full_name, "Ray Wenderlich");
    assert_eq!(record.email, "ray@example.com");
}
