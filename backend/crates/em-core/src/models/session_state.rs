use crate::Session;

use serde::{Deserialize, Serialize};

/// Client-side authentication state.
///
/// `Unknown` → `Checking` → `Authenticated` | `Anonymous`; notifications and
/// sign-out move between the two settled states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "session", rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing mounted yet
    #[default]
    Unknown,
    /// Waiting for the auth service to answer the initial check
    Checking,
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown | Self::Checking)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session().map(Session::user_id)
    }

    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Checking => "checking",
            Self::Authenticated(_) => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}
