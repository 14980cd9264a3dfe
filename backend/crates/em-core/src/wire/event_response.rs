use crate::EventWithOrganizer;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub event: EventWithOrganizer,
}
