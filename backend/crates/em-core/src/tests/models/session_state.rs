use crate::{Identity, Session, SessionState};

#[test]
fn test_session_state_loading_flag() {
    assert!(SessionState::Unknown.is_loading());
    assert!(SessionState::Checking.is_loading());
    assert!(!SessionState::Anonymous.is_loading());

    let authenticated = SessionState::Authenticated(Session::from_identity(Identity::new(
        "u1", None,
    )));
    assert!(!authenticated.is_loading());
    assert_eq!(authenticated.user_id(), Some("u1"));
}

#[test]
fn test_session_state_default_is_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
}
