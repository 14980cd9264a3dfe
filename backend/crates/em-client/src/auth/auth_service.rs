use crate::{AuthSubscription, ClientResult};

use em_core::Identity;

use async_trait::async_trait;

/// What the session reconciler needs from the hosted auth service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Fast local lookup of the stored session. May be stale.
    async fn current_session(&self) -> ClientResult<Option<Identity>>;

    /// Authoritative answer from the auth service.
    async fn validated_identity(&self) -> ClientResult<Option<Identity>>;

    async fn sign_out(&self) -> ClientResult<()>;

    /// Session-change notifications. Dropping the subscription detaches it.
    fn subscribe(&self) -> AuthSubscription;
}
