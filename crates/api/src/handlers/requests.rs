//! Handlers for the admin `/admin/requests` resource.
//!
//! Every handler takes [`AuthAdmin`] and scopes each query by the
//! session's `company_id`; a request owned by another company is
//! indistinguishable from one that does not exist.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use dsar_core::document::DocumentSpec;
use dsar_core::error::CoreError;
use dsar_core::types::RequestId;
use dsar_db::models::dsar_request::{DsarRequest, RequestListQuery};
use dsar_db::models::status::{validate_transition, RequestStatus};
use dsar_db::repositories::DsarRequestRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/requests/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: RequestStatus,
}

/// Request body for `PUT /admin/requests/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct UpdateNotesRequest {
    pub response_notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/requests
///
/// Dashboard listing: the company's requests, newest first, optionally
/// filtered by `?status=`.
pub async fn list(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<Vec<DsarRequest>>> {
    let requests =
        DsarRequestRepo::list_for_company(&state.pool, admin.company_id, query.status).await?;
    Ok(Json(requests))
}

/// GET /api/v1/admin/requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<RequestId>,
) -> AppResult<Json<DsarRequest>> {
    let request = DsarRequestRepo::find_for_company(&state.pool, id, admin.company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;
    Ok(Json(request))
}

/// PUT /api/v1/admin/requests/{id}/status
///
/// Move a request along the lifecycle. Entering `completed` stamps
/// `completed_at` once; re-completing an already-completed request is a
/// no-op that returns the unchanged row.
pub async fn update_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<RequestId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DsarRequest>> {
    let request = DsarRequestRepo::find_for_company(&state.pool, id, admin.company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;

    validate_transition(request.status, input.status)?;

    // Idempotent re-completion: leave the row (and completed_at) alone.
    if request.status == RequestStatus::Completed && input.status == RequestStatus::Completed {
        return Ok(Json(request));
    }

    let updated = DsarRequestRepo::update_status(&state.pool, id, admin.company_id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;

    tracing::info!(
        request_id = %id,
        from = request.status.as_str(),
        to = updated.status.as_str(),
        admin_id = admin.admin_user_id,
        "Request status updated"
    );

    Ok(Json(updated))
}

/// PUT /api/v1/admin/requests/{id}/notes
pub async fn update_notes(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<RequestId>,
    Json(input): Json<UpdateNotesRequest>,
) -> AppResult<Json<DsarRequest>> {
    let updated = DsarRequestRepo::update_notes(
        &state.pool,
        id,
        admin.company_id,
        input.response_notes.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;
    Ok(Json(updated))
}

/// POST /api/v1/admin/requests/{id}/document
///
/// Invoke the document collaborator and persist its reference. On
/// collaborator failure the request is left exactly as it was and the
/// caller receives a document-generation error.
pub async fn generate_document(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<RequestId>,
) -> AppResult<Json<DsarRequest>> {
    let request = DsarRequestRepo::find_for_company(&state.pool, id, admin.company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;

    let spec = DocumentSpec {
        request_id: request.id,
        request_type: request.request_type.as_str().to_string(),
        requester_name: request.requester_name.clone(),
        requester_email: request.requester_email.clone(),
        generated_at: Utc::now(),
    };

    let document_ref = state
        .documents
        .generate(&spec)
        .await
        .map_err(|e| AppError::Core(CoreError::DocumentGeneration(e.to_string())))?;

    let updated =
        DsarRequestRepo::record_document(&state.pool, id, admin.company_id, &document_ref)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Request" }))?;

    tracing::info!(
        request_id = %id,
        document_ref = %document_ref,
        admin_id = admin.admin_user_id,
        "Response document recorded"
    );

    Ok(Json(updated))
}
