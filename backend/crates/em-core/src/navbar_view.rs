//! Navigation bar view model.
//!
//! The navbar never owns auth logic: everything it shows is derived from the
//! current [`SessionState`].

use crate::SessionState;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavbarView {
    /// Skeleton placeholder while the initial check is running
    Loading,
    SignedIn { display_name: String },
    /// "Sign in" / "Get started" links
    SignedOut,
}

/// What the caller should do after a navbar command completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Redirect(String),
}

impl NavbarView {
    pub fn from_state(state: &SessionState) -> Self {
        match state {
            SessionState::Unknown | SessionState::Checking => Self::Loading,
            SessionState::Authenticated(session) => Self::SignedIn {
                display_name: session.display_name(),
            },
            SessionState::Anonymous => Self::SignedOut,
        }
    }

    /// Sign-out always lands on the sign-in page.
    pub fn after_sign_out(sign_in_path: &str) -> NavAction {
        NavAction::Redirect(sign_in_path.to_string())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

impl From<&SessionState> for NavbarView {
    fn from(state: &SessionState) -> Self {
        Self::from_state(state)
    }
}
