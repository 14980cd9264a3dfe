use crate::{ClientResult, RsvpFormState, RsvpWriter, SubmitOutcome};

use em_core::{Rsvp, RsvpStatus};

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

type UpdateHook = Arc<dyn Fn(&Rsvp) + Send + Sync>;

/// Create-or-update of one user's RSVP to one event, with optimistic state.
pub struct RsvpSubmission {
    writer: Arc<dyn RsvpWriter>,
    event_id: Uuid,
    user_id: Option<Uuid>,
    sign_in_path: String,
    state: watch::Sender<RsvpFormState>,
    on_update: Option<UpdateHook>,
}

impl fmt::Debug for RsvpSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsvpSubmission")
            .field("event_id", &self.event_id)
            .field("user_id", &self.user_id)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl RsvpSubmission {
    pub fn new(
        writer: Arc<dyn RsvpWriter>,
        event_id: Uuid,
        user_id: Option<Uuid>,
        existing: Option<&Rsvp>,
        sign_in_path: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(RsvpFormState::from_existing(existing));
        Self {
            writer,
            event_id,
            user_id,
            sign_in_path: sign_in_path.into(),
            state,
            on_update: None,
        }
    }

    /// Called after every saved write, e.g. to refresh aggregate counts.
    pub fn with_on_update(mut self, hook: impl Fn(&Rsvp) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Arc::new(hook));
        self
    }

    pub fn state(&self) -> RsvpFormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RsvpFormState> {
        self.state.subscribe()
    }

    pub async fn submit(&self, status: RsvpStatus) -> SubmitOutcome {
        let Some(user_id) = self.user_id else {
            return SubmitOutcome::RedirectToSignIn(self.sign_in_path.clone());
        };

        // Claim the in-flight slot and publish the optimistic selection in
        // one step so concurrent callers see `loading` immediately.
        let mut claim = Claim::Busy;
        self.state.send_if_modified(|form| {
            if form.loading {
                return false;
            }
            if form.rsvp_id.is_some() && form.committed == Some(status) {
                claim = Claim::Unchanged;
                return false;
            }
            claim = Claim::Acquired(form.rsvp_id);
            form.selected = Some(status);
            form.loading = true;
            form.last_error = None;
            true
        });

        let existing_id = match claim {
            Claim::Busy => return SubmitOutcome::Busy,
            Claim::Unchanged => return SubmitOutcome::Unchanged,
            Claim::Acquired(existing_id) => existing_id,
        };

        let result = match existing_id {
            Some(rsvp_id) => self.writer.update_status(rsvp_id, status).await,
            None => self.insert_or_adopt(user_id, status).await,
        };

        match result {
            Ok(rsvp) => {
                self.state.send_modify(|form| {
                    form.selected = Some(rsvp.status);
                    form.committed = Some(rsvp.status);
                    form.rsvp_id = Some(rsvp.id);
                    form.loading = false;
                });
                log::info!(
                    "RSVP {} for event {} saved as {}",
                    rsvp.id,
                    self.event_id,
                    rsvp.status
                );
                if let Some(hook) = &self.on_update {
                    hook(&rsvp);
                }
                SubmitOutcome::Saved(rsvp)
            }
            Err(err) => {
                log::warn!("RSVP write for event {} failed: {}", self.event_id, err);
                self.state.send_modify(|form| {
                    form.selected = form.committed;
                    form.loading = false;
                    form.last_error = Some("Failed to update RSVP. Please try again.".to_string());
                });
                SubmitOutcome::Failed(err)
            }
        }
    }
}

impl RsvpSubmission {
    /// Insert a row; when one already exists for this user (409 from a
    /// write made elsewhere) update that row instead.
    async fn insert_or_adopt(&self, user_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp> {
        let err = match self.writer.create(user_id, self.event_id, status).await {
            Ok(rsvp) => return Ok(rsvp),
            Err(err) if err.status() == Some(409) => err,
            Err(err) => return Err(err),
        };

        match self.writer.find_existing(user_id, self.event_id).await? {
            Some(existing) => {
                log::info!(
                    "RSVP for event {} already exists as {}, updating it",
                    self.event_id,
                    existing.id
                );
                self.writer.update_status(existing.id, status).await
            }
            None => Err(err),
        }
    }
}

enum Claim {
    Busy,
    Unchanged,
    Acquired(Option<Uuid>),
}
