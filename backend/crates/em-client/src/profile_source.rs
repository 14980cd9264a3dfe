use crate::ClientResult;

use em_core::Profile;

use async_trait::async_trait;

/// Where the reconciler gets the richer user record from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// `Ok(None)` when the user has no profile row.
    async fn fetch_profile(&self, user_id: &str) -> ClientResult<Option<Profile>>;
}
