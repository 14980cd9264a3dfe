//! Reconciled view of the signed-in user.

use crate::{Identity, Profile};

use serde::{Deserialize, Serialize};

/// Fallback used when neither profile, metadata nor email yield a name.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Identity plus the optional Profile fetched for it.
///
/// Field precedence: Profile overrides Identity field by field; whatever the
/// Profile does not provide falls back to the Identity. A missing Profile
/// never removes the Identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    identity: Identity,
    profile: Option<Profile>,
}

impl Session {
    pub fn from_identity(identity: Identity) -> Self {
        Self {
            identity,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn merge_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Replace the identity (e.g. after a token refresh) and keep the
    /// merged profile when it still belongs to the same user.
    pub fn refresh_identity(&mut self, identity: Identity) {
        if identity.id != self.identity.id {
            self.profile = None;
        }
        self.identity = identity;
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn user_id(&self) -> &str {
        &self.identity.id
    }

    pub fn is_enriched(&self) -> bool {
        self.profile.is_some()
    }

    /// Profile email, else identity email.
    pub fn email(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .map(|p| p.email.as_str())
            .filter(|email| !email.is_empty())
            .or(self.identity.email.as_deref())
    }

    /// Profile name > identity metadata name > email local part > "User".
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .profile
            .as_ref()
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
        {
            return name.to_string();
        }

        if let Some(name) = self.identity.metadata_name() {
            return name.to_string();
        }

        self.email()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_string()
    }
}
