use crate::Attendee;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeListResponse {
    pub rsvps: Vec<Attendee>,
}
