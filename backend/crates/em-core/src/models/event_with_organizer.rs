use crate::{Event, Organizer, Rsvp, RsvpCounts, RsvpStatus};

use serde::{Deserialize, Serialize};

/// An event joined with its organizer and RSVP aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWithOrganizer {
    #[serde(flatten)]
    pub event: Event,
    pub organizer: Option<Organizer>,
    pub rsvp_count: RsvpCounts,
    /// The viewing user's RSVP, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rsvp: Option<Rsvp>,
}

impl EventWithOrganizer {
    pub fn new(
        event: Event,
        organizer: Option<Organizer>,
        statuses: impl IntoIterator<Item = RsvpStatus>,
    ) -> Self {
        Self {
            event,
            organizer,
            rsvp_count: RsvpCounts::tally(statuses),
            user_rsvp: None,
        }
    }

    pub fn with_user_rsvp(mut self, rsvp: Option<Rsvp>) -> Self {
        self.user_rsvp = rsvp;
        self
    }

    pub fn organizer_name(&self) -> &str {
        self.organizer
            .as_ref()
            .map(|o| o.name.as_str())
            .unwrap_or("Unknown")
    }
}
