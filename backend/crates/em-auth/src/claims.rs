use crate::{AuthError, Result as AuthErrorResult};

use em_core::Identity;

use std::collections::BTreeMap;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_SUBJECT_LEN: usize = 128;

/// Session token claims issued by the hosted auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form metadata captured at sign-up (display name etc.)
    #[serde(default)]
    pub user_metadata: BTreeMap<String, Value>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LEN {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if let Some(email) = &self.email
            && !email.contains('@')
        {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: format!("'{email}' is not an email address"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Read the payload of a token without checking its signature.
    ///
    /// Used for the fast, local session lookup. Anything that must be trusted
    /// goes through [`crate::JwtValidator`] or the auth service instead.
    #[track_caller]
    pub fn peek_unverified(token: &str) -> AuthErrorResult<Self> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => {
                return Err(AuthError::MalformedToken {
                    message: "expected three dot-separated segments".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken {
                message: format!("payload is not base64url: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims: Claims =
            serde_json::from_slice(&bytes).map_err(|e| AuthError::MalformedToken {
                message: format!("payload is not valid claims JSON: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        claims.validate()?;
        Ok(claims)
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.sub,
            email: self.email,
            metadata: self.user_metadata,
        }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        claims.into_identity()
    }
}
