use crate::Rsvp;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub rsvp: Rsvp,
}
