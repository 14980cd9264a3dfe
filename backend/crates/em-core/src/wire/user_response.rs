use crate::Identity;

use serde::{Deserialize, Serialize};

/// Authoritative identity answer from `/auth/v1/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: Identity,
}
