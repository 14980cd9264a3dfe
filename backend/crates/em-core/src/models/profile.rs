use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application-level user record (`users` table), keyed 1:1 by identity id.
///
/// Created by the sign-up flow; only ever read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
