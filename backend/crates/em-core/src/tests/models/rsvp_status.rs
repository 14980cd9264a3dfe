use crate::RsvpStatus;

use std::str::FromStr;

#[test]
fn test_rsvp_status_as_str() {
    assert_eq!(RsvpStatus::Yes.as_str(), "Yes");
    assert_eq!(RsvpStatus::No.as_str(), "No");
    assert_eq!(RsvpStatus::Maybe.as_str(), "Maybe");
}

#[test]
fn test_rsvp_status_from_str() {
    assert_eq!(RsvpStatus::from_str("Yes").unwrap(), RsvpStatus::Yes);
    assert_eq!(RsvpStatus::from_str("No").unwrap(), RsvpStatus::No);
    assert_eq!(RsvpStatus::from_str("Maybe").unwrap(), RsvpStatus::Maybe);
    assert!(RsvpStatus::from_str("yes").is_err());
    assert!(RsvpStatus::from_str("").is_err());
}

#[test]
fn test_rsvp_status_serde_uses_database_spelling() {
    let json = serde_json::to_string(&RsvpStatus::Maybe).unwrap();
    assert_eq!(json, "\"Maybe\"");

    let parsed: RsvpStatus = serde_json::from_str("\"No\"").unwrap();
    assert_eq!(parsed, RsvpStatus::No);
}

#[test]
fn test_rsvp_status_display_order_is_yes_maybe_no() {
    assert_eq!(
        RsvpStatus::ALL,
        [RsvpStatus::Yes, RsvpStatus::Maybe, RsvpStatus::No]
    );
    assert_eq!(RsvpStatus::No.label(), "Can't go");
}
