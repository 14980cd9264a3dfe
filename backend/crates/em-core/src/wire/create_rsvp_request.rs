use crate::RsvpStatus;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRsvpRequest {
    pub event_id: Uuid,
    pub status: RsvpStatus,
    /// Must match the authenticated user when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}
