use crate::{Identity, Profile, Session};

use serde_json::json;
use uuid::Uuid;

fn profile(name: &str, email: &str) -> Profile {
    Profile::new(Uuid::new_v4(), name.to_string(), email.to_string())
}

#[test]
fn given_identity_only_when_display_name_then_email_local_part() {
    let session = Session::from_identity(Identity::new("u1", Some("ada@example.com".into())));

    assert_eq!(session.display_name(), "ada");
    assert!(!session.is_enriched());
}

#[test]
fn given_metadata_name_when_display_name_then_metadata_wins_over_email() {
    let identity = Identity::new("u1", Some("ada@example.com".into()))
        .with_metadata("name", json!("Ada Lovelace"));
    let session = Session::from_identity(identity);

    assert_eq!(session.display_name(), "Ada Lovelace");
}

#[test]
fn given_profile_when_merged_then_profile_fields_override_identity() {
    let identity = Identity::new("u1", Some("old@example.com".into()))
        .with_metadata("name", json!("Meta Name"));
    let session = Session::from_identity(identity)
        .with_profile(profile("Profile Name", "new@example.com"));

    assert_eq!(session.display_name(), "Profile Name");
    assert_eq!(session.email(), Some("new@example.com"));
    assert_eq!(session.user_id(), "u1");
}

#[test]
fn given_profile_with_blank_fields_when_merged_then_identity_fields_are_fallback() {
    let identity = Identity::new("u1", Some("ada@example.com".into()));
    let session = Session::from_identity(identity).with_profile(profile("  ", ""));

    assert_eq!(session.display_name(), "ada");
    assert_eq!(session.email(), Some("ada@example.com"));
}

#[test]
fn given_no_email_and_no_names_when_display_name_then_default() {
    let session = Session::from_identity(Identity::new("u1", None));

    assert_eq!(session.display_name(), "User");
}

#[test]
fn given_same_user_when_identity_refreshed_then_profile_kept() {
    let mut session = Session::from_identity(Identity::new("u1", Some("a@example.com".into())))
        .with_profile(profile("Ada", "a@example.com"));

    session.refresh_identity(Identity::new("u1", Some("b@example.com".into())));

    assert!(session.is_enriched());
    assert_eq!(session.identity().email.as_deref(), Some("b@example.com"));
}

#[test]
fn given_other_user_when_identity_refreshed_then_profile_dropped() {
    let mut session = Session::from_identity(Identity::new("u1", None))
        .with_profile(profile("Ada", "a@example.com"));

    session.refresh_identity(Identity::new("u2", None));

    assert!(!session.is_enriched());
    assert_eq!(session.user_id(), "u2");
}
