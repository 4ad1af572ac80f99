//! Route definitions for the public intake flow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::intake;
use crate::state::AppState;

/// Public routes mounted at the API root.
///
/// ```text
/// POST /requests                    -> submit
/// GET  /requests/{id}/confirmation  -> confirmation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requests", post(intake::submit))
        .route("/requests/{id}/confirmation", get(intake::confirmation))
}
