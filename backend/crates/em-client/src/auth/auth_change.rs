use em_core::Identity;

/// Why the auth service's session changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// One session-change notification.
///
/// `identity` is `None` exactly when there is no longer a session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub identity: Option<Identity>,
}

impl AuthChange {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            event: AuthEvent::SignedIn,
            identity: Some(identity),
        }
    }

    pub fn token_refreshed(identity: Identity) -> Self {
        Self {
            event: AuthEvent::TokenRefreshed,
            identity: Some(identity),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            event: AuthEvent::SignedOut,
            identity: None,
        }
    }
}
