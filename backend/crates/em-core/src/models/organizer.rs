use serde::{Deserialize, Serialize};

/// Organizer columns joined onto an event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}
