//! Per-request session view for server-rendered pages.
//!
//! Pages reconcile the verified identity with its profile row the same way
//! the client does: a missing or unreadable profile leaves an identity-only
//! session rather than failing the page.

use crate::AppState;
use crate::pages::html::{layout, navbar};

use em_core::{Identity, NavbarView, Session, SessionState};
use em_db::UserRepository;

use axum::response::Html;
use uuid::Uuid;

pub struct PageContext {
    pub session: SessionState,
    pub site_title: String,
    pub sign_in_path: String,
}

impl PageContext {
    pub async fn resolve(state: &AppState, identity: Option<Identity>) -> Self {
        let session = match identity {
            Some(identity) => SessionState::Authenticated(enrich(state, identity).await),
            None => SessionState::Anonymous,
        };

        Self {
            session,
            site_title: state.site_title.clone(),
            sign_in_path: state.sign_in_path.clone(),
        }
    }

    /// The signed-in user's id, when the session subject is one.
    pub fn user_uuid(&self) -> Option<Uuid> {
        self.session
            .session()
            .and_then(|session| session.identity().user_uuid().ok())
    }

    pub fn render(&self, page_title: &str, body: &str) -> Html<String> {
        let nav = navbar(
            &self.site_title,
            &NavbarView::from_state(&self.session),
            &self.sign_in_path,
        );
        Html(layout(page_title, &self.site_title, &nav, body))
    }
}

async fn enrich(state: &AppState, identity: Identity) -> Session {
    let Ok(user_id) = identity.user_uuid() else {
        return Session::from_identity(identity);
    };

    match UserRepository::new(state.pool.clone()).find_by_id(user_id).await {
        Ok(Some(profile)) => Session::from_identity(identity).with_profile(profile),
        Ok(None) => Session::from_identity(identity),
        Err(e) => {
            log::warn!("Profile lookup for {} failed: {}", user_id, e);
            Session::from_identity(identity)
        }
    }
}
