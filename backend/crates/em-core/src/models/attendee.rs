use crate::Rsvp;

use serde::{Deserialize, Serialize};

/// RSVP row joined with the responding user's profile columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(flatten)]
    pub rsvp: Rsvp,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Attendee {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}
