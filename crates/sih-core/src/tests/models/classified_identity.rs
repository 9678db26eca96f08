use crate::{ClassifiedIdentity, UserIdentity};

fn first_time_identity() -> UserIdentity {
    UserIdentity::first_authorization(
        "u1",
        "Ray Wenderlich",
        "ray@example.com",
        b"token".to_vec(),
        b"code".to_vec(),
    )
}

#[test]
fn test_classify_with_both_profile_fields_is_new_account() {
    let classified = ClassifiedIdentity::classify(first_time_identity());

    match classified {
        ClassifiedIdentity::NewAccount(identity) => {
            assert_eq!(identity.identifier, "u1");
            assert_eq!(identity.full_name, "Ray Wenderlich");
            assert_eq!(identity.email, "ray@example.com");
            assert_eq!(identity.identity_token, b"token");
            assert_eq!(identity.authorization_code, b"code");
        }
        ClassifiedIdentity::Returning(_) => panic!("expected new-account classification"),
    }
}

#[test]
fn test_classify_without_profile_fields_is_returning() {
    let identity = UserIdentity::returning("u1", b"token".to_vec(), b"code".to_vec());

    let classified = ClassifiedIdentity::classify(identity);

    assert!(!classified.is_new_account());
    assert_eq!(classified.identifier(), "u1");
}

#[test]
fn test_classify_with_only_name_is_returning() {
    let mut identity = first_time_identity();
    identity.email = None;

    let classified = ClassifiedIdentity::classify(identity);

    assert!(!classified.is_new_account());
}

#[test]
fn test_classify_with_only_email_is_returning() {
    let mut identity = first_time_identity();
    identity.full_name = None;

    let classified = ClassifiedIdentity::classify(identity);

    assert!(!classified.is_new_account());
}
