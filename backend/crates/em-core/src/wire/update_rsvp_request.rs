use crate::RsvpStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRsvpRequest {
    pub status: RsvpStatus,
}
