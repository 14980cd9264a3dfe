use crate::{CoreError, Identity};

use serde_json::json;

#[test]
fn given_uuid_subject_when_user_uuid_then_parsed() {
    let identity = Identity::new("6f1c9a52-3d0e-4a57-9d8e-2b6f0c1d4e5a", None);

    let id = identity.user_uuid().unwrap();

    assert_eq!(id.to_string(), "6f1c9a52-3d0e-4a57-9d8e-2b6f0c1d4e5a");
}

#[test]
fn given_opaque_subject_when_user_uuid_then_uuid_error() {
    let identity = Identity::new("u1", None);

    assert!(matches!(identity.user_uuid(), Err(CoreError::Uuid { .. })));
}

#[test]
fn given_blank_metadata_name_when_read_then_none() {
    let identity = Identity::new("u1", None).with_metadata("name", json!("   "));

    assert_eq!(identity.metadata_name(), None);
}

#[test]
fn given_non_string_metadata_name_when_read_then_none() {
    let identity = Identity::new("u1", None).with_metadata("name", json!(42));

    assert_eq!(identity.metadata_name(), None);
}

#[test]
fn given_identity_json_without_metadata_when_deserialized_then_metadata_empty() {
    let identity: Identity =
        serde_json::from_value(json!({ "id": "u1", "email": "a@example.com" })).unwrap();

    assert!(identity.metadata.is_empty());
    assert_eq!(identity.email.as_deref(), Some("a@example.com"));
}
