use crate::{
    ApiClient, AuthChange, AuthChannel, AuthService, AuthSubscription, ClientResult,
};

use em_auth::{AuthError, Claims};
use em_core::Identity;

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;

/// [`AuthService`] backed by em-server's auth endpoints.
///
/// The access token is kept in the shared [`ApiClient`], so row API calls
/// made through the same client carry it too.
#[derive(Clone)]
pub struct HttpAuthService {
    api: ApiClient,
    channel: AuthChannel,
}

impl HttpAuthService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            channel: AuthChannel::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Install a freshly issued access token and notify subscribers.
    ///
    /// Emits `TokenRefreshed` when the same user was already signed in,
    /// `SignedIn` otherwise. An expired token is refused and nothing changes.
    #[track_caller]
    pub fn set_session(&self, access_token: &str) -> ClientResult<Identity> {
        let claims = Claims::peek_unverified(access_token)?;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
        let previous_user = self.local_identity().map(|identity| identity.id);

        self.api.set_token(access_token);
        let identity = claims.into_identity();

        let change = if previous_user.as_deref() == Some(identity.id.as_str()) {
            AuthChange::token_refreshed(identity.clone())
        } else {
            AuthChange::signed_in(identity.clone())
        };
        log::debug!("Session installed for user {} ({:?})", identity.id, change.event);
        self.channel.publish(change);

        Ok(identity)
    }

    /// Identity from the stored token, if it decodes and has not expired.
    fn local_identity(&self) -> Option<Identity> {
        let token = self.api.token()?;
        match Claims::peek_unverified(&token) {
            Ok(claims) if !claims.is_expired_at(Utc::now().timestamp()) => {
                Some(claims.into_identity())
            }
            Ok(_) => {
                log::debug!("Stored session token has expired");
                None
            }
            Err(err) => {
                log::debug!("Stored session token is unreadable: {}", err);
                None
            }
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn current_session(&self) -> ClientResult<Option<Identity>> {
        Ok(self.local_identity())
    }

    async fn validated_identity(&self) -> ClientResult<Option<Identity>> {
        if self.api.token().is_none() {
            return Ok(None);
        }
        self.api.current_user().await
    }

    async fn sign_out(&self) -> ClientResult<()> {
        let result = match self.api.token() {
            Some(_) => self.api.logout().await,
            None => Ok(()),
        };
        // Local sign-out happens whatever the server said
        self.api.clear_token();
        self.channel.publish(AuthChange::signed_out());
        result
    }

    fn subscribe(&self) -> AuthSubscription {
        self.channel.subscribe()
    }
}
