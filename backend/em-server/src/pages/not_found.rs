//! 404 page, also the router fallback

use crate::metrics::record_page_render;
use crate::pages::page_context::PageContext;
use crate::{AppState, CurrentIdentity};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn not_found(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Response {
    let page = PageContext::resolve(&state, identity).await;
    not_found_page(&page)
}

pub fn not_found_page(page: &PageContext) -> Response {
    record_page_render("not_found");
    let body = r#"<section class="not-found"><h1>Page not found</h1><p>The page you are looking for does not exist.</p><a href="/">Back to events</a></section>"#;
    (StatusCode::NOT_FOUND, page.render("Not found", body)).into_response()
}
