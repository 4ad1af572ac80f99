//! Route definitions for the admin `/admin/requests` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/admin/requests`. All of them require a valid admin
/// session; the handlers scope every query to the session's company.
///
/// ```text
/// GET  /               -> list
/// GET  /{id}           -> get_by_id
/// PUT  /{id}/status    -> update_status
/// PUT  /{id}/notes     -> update_notes
/// POST /{id}/document  -> generate_document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list))
        .route("/{id}", get(requests::get_by_id))
        .route("/{id}/status", put(requests::update_status))
        .route("/{id}/notes", put(requests::update_notes))
        .route("/{id}/document", post(requests::generate_document))
}
