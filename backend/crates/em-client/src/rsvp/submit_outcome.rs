use crate::ClientError;

use em_core::Rsvp;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// No signed-in user; nothing was written
    RedirectToSignIn(String),
    Saved(Rsvp),
    /// Same status as the committed row; nothing was sent
    Unchanged,
    /// Another submission is still in flight
    Busy,
    /// Write failed; the selection was reverted and the user may retry
    Failed(ClientError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}
