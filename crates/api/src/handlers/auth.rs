//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use dsar_core::error::CoreError;
use dsar_core::types::DbId;
use dsar_db::models::session::CreateAdminSession;
use dsar_db::repositories::{AdminSessionRepo, AdminUserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::bearer_token;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent admin calls.
    pub token: String,
    /// Session idle lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminInfo,
}

/// Public admin info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub email: String,
    pub company_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. On success a fresh session token is
/// minted (never a reused identifier) and the admin's company scope is
/// copied into the session row.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Unknown email and wrong password must be indistinguishable.
    let admin = AdminUserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let (token, token_hash) = generate_session_token();
    let ttl_mins = i64::from(state.config.session_ttl_mins);
    let expires_at = Utc::now() + chrono::Duration::minutes(ttl_mins);

    AdminSessionRepo::create(
        &state.pool,
        &CreateAdminSession {
            admin_user_id: admin.id,
            admin_email: admin.email.clone(),
            company_id: admin.company_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, company_id = admin.company_id, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: ttl_mins * 60,
        admin: AdminInfo {
            id: admin.id,
            email: admin.email,
            company_id: admin.company_id,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// End the presented session. Idempotent: an absent or already-ended
/// session still yields 204, so repeated logouts are harmless.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<StatusCode> {
    if let Some(token) = bearer_token(&headers) {
        AdminSessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(token)).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
