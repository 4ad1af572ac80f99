//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use dsar_core::error::CoreError;
use dsar_core::types::DbId;
use dsar_db::repositories::AdminSessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer session token in the
/// `Authorization` header.
///
/// This is the explicit request context for admin operations: the company
/// scope was bound to the session at login and every tenant-filtered query
/// reads it from here. Use it as an extractor parameter in any handler that
/// requires authentication:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(company_id = admin.company_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// A valid lookup also slides the session's expiry forward, giving the
/// configured idle timeout.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The session row's database id.
    pub session_id: DbId,
    /// The admin user's internal database id.
    pub admin_user_id: DbId,
    /// The admin's email, copied into the session at login.
    pub admin_email: String,
    /// The company scope bound to the session at login.
    pub company_id: DbId,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(&parts.headers).ok_or(AppError::Core(CoreError::Unauthenticated))?;

        let session = AdminSessionRepo::find_active_and_touch(
            &state.pool,
            &hash_session_token(token),
            state.config.session_ttl_mins,
        )
        .await?
        .ok_or(AppError::Core(CoreError::Unauthenticated))?;

        Ok(AuthAdmin {
            session_id: session.id,
            admin_user_id: session.admin_user_id,
            admin_email: session.admin_email,
            company_id: session.company_id,
        })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
