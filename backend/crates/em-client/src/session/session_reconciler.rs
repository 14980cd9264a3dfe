//! Keeps a [`SessionStore`] in step with the auth service.
//!
//! Intents (the mount check, each auth notification, sign-out) start a new
//! store epoch. Profile enrichment and revalidation run as background tasks
//! tagged with the epoch they started under; their results are dropped if
//! another intent happened first or the reconciler was torn down.

use crate::{
    AuthChange, AuthNotification, AuthService, AuthSubscription, ClientResult, ProfileSource,
    SessionStore, SessionWatch,
};

use em_core::{Identity, Session, SessionState};

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::task::JoinSet;

struct Shared {
    store: SessionStore,
    auth: Arc<dyn AuthService>,
    profiles: Arc<dyn ProfileSource>,
    tasks: Mutex<JoinSet<()>>,
}

/// Owner of one mounted session. Dropping it tears it down.
pub struct SessionReconciler {
    shared: Arc<Shared>,
}

impl SessionReconciler {
    /// Subscribe to auth changes, enter `Checking` and start the initial
    /// session check. Must be called inside a tokio runtime.
    pub fn mount(auth: Arc<dyn AuthService>, profiles: Arc<dyn ProfileSource>) -> Self {
        Self::mount_with_store(SessionStore::new(), auth, profiles)
    }

    pub fn mount_with_store(
        store: SessionStore,
        auth: Arc<dyn AuthService>,
        profiles: Arc<dyn ProfileSource>,
    ) -> Self {
        // Subscribe before checking so no change between the two is missed
        let subscription = auth.subscribe();

        let shared = Arc::new(Shared {
            store,
            auth,
            profiles,
            tasks: Mutex::new(JoinSet::new()),
        });

        if let Some(epoch) = shared.store.begin_intent(|state| *state = SessionState::Checking) {
            let check = Arc::clone(&shared);
            shared.spawn(async move { check.run_session_check(epoch).await });
        }

        let listener = Arc::clone(&shared);
        shared.spawn(async move { listener.listen(subscription).await });

        log::debug!("Session reconciler mounted");
        Self { shared }
    }

    pub fn store(&self) -> &SessionStore {
        &self.shared.store
    }

    pub fn state(&self) -> SessionState {
        self.shared.store.state()
    }

    pub fn subscribe(&self) -> SessionWatch {
        self.shared.store.subscribe()
    }

    /// Sign out through the auth service, then force `Anonymous`.
    ///
    /// The store reads `Anonymous` when this returns, even if the auth
    /// service call failed; that error is still returned to the caller.
    pub async fn sign_out(&self) -> ClientResult<()> {
        let result = self.shared.auth.sign_out().await;
        if let Err(err) = &result {
            log::warn!("Auth service sign-out failed, clearing session anyway: {}", err);
        }
        self.shared
            .store
            .begin_intent(|state| *state = SessionState::Anonymous);
        result
    }

    /// Close the store, detach from notifications and abandon background
    /// work. Idempotent.
    pub fn teardown(&self) {
        self.shared.store.close();
        if let Ok(mut tasks) = self.shared.tasks.lock() {
            tasks.abort_all();
        }
    }
}

impl Drop for SessionReconciler {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Shared {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Ok(mut tasks) = self.tasks.lock() else {
            return;
        };
        // Reap finished tasks so the set only holds live work
        while tasks.try_join_next().is_some() {}
        if self.store.is_open() {
            tasks.spawn(task);
        }
    }

    /// Fast local check, then background enrichment and revalidation.
    async fn run_session_check(self: Arc<Self>, epoch: u64) {
        match self.auth.current_session().await {
            Ok(Some(identity)) => {
                let user_id = identity.id.clone();
                let applied = self.store.apply_if_current(epoch, |state| {
                    *state = SessionState::Authenticated(Session::from_identity(identity));
                    true
                });
                if applied {
                    log::debug!("Existing session found for user {}", user_id);
                    self.start_enrichment(epoch, user_id.clone());
                    self.start_revalidation(epoch, user_id);
                }
            }
            Ok(None) => {
                self.store.apply_if_current(epoch, |state| {
                    *state = SessionState::Anonymous;
                    true
                });
            }
            Err(err) => {
                log::warn!("Session check failed, treating visitor as anonymous: {}", err);
                self.store.apply_if_current(epoch, |state| {
                    *state = SessionState::Anonymous;
                    true
                });
            }
        }
    }

    async fn listen(self: Arc<Self>, mut subscription: AuthSubscription) {
        loop {
            match subscription.recv().await {
                AuthNotification::Change(change) => self.handle_change(change),
                AuthNotification::Lagged { skipped } => {
                    log::warn!(
                        "Missed {} auth notifications, re-checking the session",
                        skipped
                    );
                    let Some(epoch) = self.store.begin_intent(|_| {}) else {
                        break;
                    };
                    Arc::clone(&self).run_session_check(epoch).await;
                }
                AuthNotification::Closed => {
                    log::debug!("Auth notifications closed");
                    break;
                }
            }
        }
    }

    fn handle_change(self: &Arc<Self>, change: AuthChange) {
        log::debug!("Auth change: {:?}", change.event);

        match change.identity {
            Some(identity) => {
                let user_id = identity.id.clone();
                let epoch = self.store.begin_intent(|state| adopt_identity(state, identity));
                if let Some(epoch) = epoch {
                    self.start_enrichment(epoch, user_id);
                }
            }
            None => {
                self.store
                    .begin_intent(|state| *state = SessionState::Anonymous);
            }
        }
    }

    fn start_enrichment(self: &Arc<Self>, epoch: u64, user_id: String) {
        let shared = Arc::clone(self);
        self.spawn(async move {
            match shared.profiles.fetch_profile(&user_id).await {
                Ok(Some(profile)) => {
                    let merged = shared.store.apply_if_current(epoch, |state| {
                        match state.session_mut() {
                            Some(session) if session.user_id() == user_id => {
                                session.merge_profile(profile);
                                true
                            }
                            _ => false,
                        }
                    });
                    if merged {
                        log::debug!("Profile merged for user {}", user_id);
                    }
                }
                Ok(None) => log::debug!("No profile row for user {}", user_id),
                Err(err) => log::warn!(
                    "User {} is signed in but profile fetch failed: {}",
                    user_id,
                    err
                ),
            }
        });
    }

    fn start_revalidation(self: &Arc<Self>, epoch: u64, user_id: String) {
        let shared = Arc::clone(self);
        self.spawn(async move {
            match shared.auth.validated_identity().await {
                Ok(Some(identity)) if identity.id == user_id => {
                    shared.store.apply_if_current(epoch, |state| match state.session_mut() {
                        Some(session) if session.identity() != &identity => {
                            session.refresh_identity(identity);
                            true
                        }
                        _ => false,
                    });
                }
                Ok(other) => {
                    let downgraded = shared.store.apply_if_current(epoch, |state| {
                        if state.is_authenticated() {
                            *state = SessionState::Anonymous;
                            true
                        } else {
                            false
                        }
                    });
                    if downgraded {
                        log::info!(
                            "Local session for {} rejected by auth service (now {}), signing out",
                            user_id,
                            other.as_ref().map(|i| i.id.as_str()).unwrap_or("none")
                        );
                    }
                }
                // Transport trouble is not evidence the session is invalid
                Err(err) => log::warn!("Session revalidation failed: {}", err),
            }
        });
    }
}

/// Notification carrying a session: keep the merged profile when it is the
/// same user, otherwise start over from the bare identity.
fn adopt_identity(state: &mut SessionState, identity: Identity) {
    match state.session_mut() {
        Some(session) if session.user_id() == identity.id => session.refresh_identity(identity),
        _ => *state = SessionState::Authenticated(Session::from_identity(identity)),
    }
}
