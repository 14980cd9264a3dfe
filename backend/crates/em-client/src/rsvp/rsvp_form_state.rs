use em_core::{Rsvp, RsvpStatus};

use uuid::Uuid;

/// What the RSVP buttons render from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpFormState {
    /// Highlighted option; optimistic while `loading`
    pub selected: Option<RsvpStatus>,
    /// Last status the server accepted
    pub committed: Option<RsvpStatus>,
    /// Row to update on the next submission
    pub rsvp_id: Option<Uuid>,
    /// Buttons are disabled while true
    pub loading: bool,
    /// Message for the last failed submission, cleared on the next attempt
    pub last_error: Option<String>,
}

impl RsvpFormState {
    pub fn from_existing(existing: Option<&Rsvp>) -> Self {
        Self {
            selected: existing.map(|r| r.status),
            committed: existing.map(|r| r.status),
            rsvp_id: existing.map(|r| r.id),
            loading: false,
            last_error: None,
        }
    }

    pub fn is_selected(&self, status: RsvpStatus) -> bool {
        self.selected == Some(status)
    }
}
