use crate::{Identity, NavAction, NavbarView, Session, SessionState};

#[test]
fn given_checking_state_when_rendered_then_loading_placeholder() {
    assert_eq!(
        NavbarView::from_state(&SessionState::Checking),
        NavbarView::Loading
    );
}

#[test]
fn given_identity_only_session_when_rendered_then_signed_in_with_fallback_name() {
    let state = SessionState::Authenticated(Session::from_identity(Identity::new(
        "u1",
        Some("grace@example.com".into()),
    )));

    let view = NavbarView::from(&state);

    assert_eq!(
        view,
        NavbarView::SignedIn {
            display_name: "grace".to_string()
        }
    );
    assert!(view.is_signed_in());
}

#[test]
fn given_anonymous_state_when_rendered_then_signed_out() {
    assert_eq!(
        NavbarView::from_state(&SessionState::Anonymous),
        NavbarView::SignedOut
    );
}

#[test]
fn given_sign_out_when_completed_then_redirects_to_sign_in() {
    assert_eq!(
        NavbarView::after_sign_out("/auth/login"),
        NavAction::Redirect("/auth/login".to_string())
    );
}
