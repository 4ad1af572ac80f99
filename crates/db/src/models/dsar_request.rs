//! DSAR request entity model and DTOs.

use dsar_core::types::{DbId, RequestId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::{RequestStatus, RequestType};

/// A row from the `dsar_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DsarRequest {
    pub id: RequestId,
    pub company_id: DbId,
    pub requester_email: String,
    pub requester_name: String,
    pub request_type: RequestType,
    pub request_message: Option<String>,
    pub status: RequestStatus,
    pub response_document_ref: Option<String>,
    pub response_notes: Option<String>,
    pub submitted_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a request through the public intake flow.
///
/// Status and timestamps are fixed by the insert itself: every new request
/// starts out `pending` with `submitted_at = NOW()` and no `completed_at`.
#[derive(Debug)]
pub struct CreateDsarRequest {
    pub company_id: DbId,
    pub requester_email: String,
    pub requester_name: String,
    pub request_type: RequestType,
    pub request_message: Option<String>,
}

/// Public view of a request for the submitter's confirmation page.
///
/// Omits internal-only fields (company scope, admin notes, document ref).
#[derive(Debug, Clone, Serialize)]
pub struct PublicDsarRequest {
    pub id: RequestId,
    pub requester_email: String,
    pub requester_name: String,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub submitted_at: Timestamp,
}

impl From<DsarRequest> for PublicDsarRequest {
    fn from(request: DsarRequest) -> Self {
        Self {
            id: request.id,
            requester_email: request.requester_email,
            requester_name: request.requester_name,
            request_type: request.request_type,
            status: request.status,
            submitted_at: request.submitted_at,
        }
    }
}

/// Query parameters for the admin dashboard listing.
#[derive(Debug, Deserialize)]
pub struct RequestListQuery {
    /// Optional status filter.
    pub status: Option<RequestStatus>,
}
