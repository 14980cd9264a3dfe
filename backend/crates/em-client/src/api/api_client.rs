use crate::{ClientError, ClientResult, ProfileSource, RsvpWriter};

use em_core::{
    Attendee, AttendeeListResponse, CreateRsvpRequest, EventListResponse, EventResponse,
    EventSummary, EventSummaryListResponse, EventWithOrganizer, Identity, Profile,
    ProfileResponse, Rsvp, RsvpResponse, RsvpStatus, UpdateRsvpRequest, UserResponse,
};

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for the em-server row API and auth endpoints
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Access token sent as a bearer credential, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// Build a request with the bearer token when one is installed
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and decode a success body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`Self::execute`] but a 404 becomes `None`
    async fn execute_optional<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<Option<T>> {
        match self.execute(req).await {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[track_caller]
    fn error_from_body(status: StatusCode, bytes: &[u8]) -> ClientError {
        let body: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN");
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        ClientError::api_error(status.as_u16(), code, message)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Upcoming events with organizer and counts
    pub async fn list_events(&self) -> ClientResult<Vec<EventWithOrganizer>> {
        let req = self.request(Method::GET, "/api/v1/events");
        let body: EventListResponse = self.execute(req).await?;
        Ok(body.events)
    }

    pub async fn event_summaries(&self) -> ClientResult<Vec<EventSummary>> {
        let req = self.request(Method::GET, "/api/v1/events/summary");
        let body: EventSummaryListResponse = self.execute(req).await?;
        Ok(body.summaries)
    }

    /// One event; includes the caller's RSVP when a token is installed
    pub async fn get_event(&self, id: Uuid) -> ClientResult<Option<EventWithOrganizer>> {
        let req = self.request(Method::GET, &format!("/api/v1/events/{}", id));
        let body: Option<EventResponse> = self.execute_optional(req).await?;
        Ok(body.map(|b| b.event))
    }

    pub async fn event_rsvps(&self, event_id: Uuid) -> ClientResult<Vec<Attendee>> {
        let req = self.request(Method::GET, &format!("/api/v1/events/{}/rsvps", event_id));
        let body: AttendeeListResponse = self.execute(req).await?;
        Ok(body.rsvps)
    }

    // =========================================================================
    // RSVPs
    // =========================================================================

    pub async fn create_rsvp(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        status: RsvpStatus,
    ) -> ClientResult<Rsvp> {
        let body = CreateRsvpRequest {
            event_id,
            status,
            user_id: Some(user_id),
        };
        let req = self.request(Method::POST, "/api/v1/rsvps").json(&body);
        let body: RsvpResponse = self.execute(req).await?;
        Ok(body.rsvp)
    }

    pub async fn update_rsvp_status(&self, rsvp_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp> {
        let req = self
            .request(Method::PUT, &format!("/api/v1/rsvps/{}", rsvp_id))
            .json(&UpdateRsvpRequest { status });
        let body: RsvpResponse = self.execute(req).await?;
        Ok(body.rsvp)
    }

    // =========================================================================
    // Users & auth
    // =========================================================================

    pub async fn get_profile(&self, user_id: Uuid) -> ClientResult<Option<Profile>> {
        let req = self.request(Method::GET, &format!("/api/v1/users/{}", user_id));
        let body: Option<ProfileResponse> = self.execute_optional(req).await?;
        Ok(body.map(|b| b.profile))
    }

    /// Identity behind the installed token; `None` when the server rejects it
    pub async fn current_user(&self) -> ClientResult<Option<Identity>> {
        let req = self.request(Method::GET, "/auth/v1/user");
        match self.execute::<UserResponse>(req).await {
            Ok(body) => Ok(Some(body.user)),
            Err(err) if err.status() == Some(StatusCode::UNAUTHORIZED.as_u16()) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn logout(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/auth/v1/logout");
        let _: Value = self.execute(req).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileSource for ApiClient {
    async fn fetch_profile(&self, user_id: &str) -> ClientResult<Option<Profile>> {
        // Non-UUID subjects have no profile row
        let Ok(id) = Uuid::parse_str(user_id) else {
            return Ok(None);
        };
        self.get_profile(id).await
    }
}

#[async_trait]
impl RsvpWriter for ApiClient {
    async fn create(&self, user_id: Uuid, event_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp> {
        self.create_rsvp(user_id, event_id, status).await
    }

    async fn update_status(&self, rsvp_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp> {
        self.update_rsvp_status(rsvp_id, status).await
    }

    async fn find_existing(&self, user_id: Uuid, event_id: Uuid) -> ClientResult<Option<Rsvp>> {
        let event = self.get_event(event_id).await?;
        Ok(event
            .and_then(|e| e.user_rsvp)
            .filter(|rsvp| rsvp.user_id == user_id))
    }
}
