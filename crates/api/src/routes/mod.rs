pub mod auth;
pub mod health;
pub mod intake;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/logout                       logout (idempotent)
///
/// /requests                          submit a DSAR request (public)
/// /requests/{id}/confirmation        confirmation page data (public)
///
/// /admin/requests                    list company requests (session required)
/// /admin/requests/{id}               request detail
/// /admin/requests/{id}/status        update lifecycle status (PUT)
/// /admin/requests/{id}/notes         update response notes (PUT)
/// /admin/requests/{id}/document      generate response document (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(intake::router())
        .nest("/admin/requests", requests::router())
}
