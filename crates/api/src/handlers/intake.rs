//! Handlers for the public intake flow: submit a request, view its
//! confirmation.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dsar_core::error::CoreError;
use dsar_core::types::RequestId;
use dsar_db::models::dsar_request::{CreateDsarRequest, PublicDsarRequest};
use dsar_db::models::status::RequestType;
use dsar_db::repositories::{CompanyRepo, DsarRequestRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /requests`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 2, max = 255, message = "Full name must be 2-255 characters"))]
    pub full_name: String,

    pub request_type: RequestType,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: RequestId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/requests
///
/// Validate the submission, create the request under the single configured
/// company, then fire both notification emails on a detached task.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let company = CompanyRepo::find_first(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NoCompanyConfigured))?;

    let request = DsarRequestRepo::create(
        &state.pool,
        &CreateDsarRequest {
            company_id: company.id,
            requester_email: input.email,
            requester_name: input.full_name,
            request_type: input.request_type,
            request_message: input.message.filter(|m| !m.is_empty()),
        },
    )
    .await?;

    tracing::info!(request_id = %request.id, request_type = ?request.request_type, "DSAR request submitted");

    // Notifications are best-effort and must never fail the submission:
    // the request is already durable, so deliver on a detached task and
    // log whatever goes wrong.
    let notifier = Arc::clone(&state.notifier);
    let request_id = request.id;
    let requester_email = request.requester_email.clone();
    let requester_name = request.requester_name.clone();
    tokio::spawn(async move {
        if let Err(e) = notifier
            .notify_requester(&requester_email, &requester_name, request_id)
            .await
        {
            tracing::warn!(request_id = %request_id, error = %e, "Requester confirmation email failed");
        }
        if let Err(e) = notifier.notify_admin(request_id, &requester_email).await {
            tracing::warn!(request_id = %request_id, error = %e, "Admin alert email failed");
        }
    });

    Ok((StatusCode::CREATED, Json(SubmitResponse { id: request.id })))
}

/// GET /api/v1/requests/{id}/confirmation
///
/// Public lookup for the submitter's confirmation page. No tenant check:
/// possession of the random 128-bit id is the authorization.
pub async fn confirmation(
    State(state): State<AppState>,
    Path(id): Path<RequestId>,
) -> AppResult<Json<PublicDsarRequest>> {
    let request = DsarRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;

    Ok(Json(request.into()))
}
