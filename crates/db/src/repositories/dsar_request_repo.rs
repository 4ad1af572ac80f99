//! Repository for the `dsar_requests` table.
//!
//! Admin-facing methods take the session's `company_id` and fold it into
//! the row predicate. Each mutation is a single UPDATE so concurrent admin
//! edits of the same request resolve through the database's row-level
//! atomicity; `completed_at` is guarded in SQL so it is set exactly once.

use dsar_core::types::{DbId, RequestId};
use sqlx::PgPool;

use crate::models::dsar_request::{CreateDsarRequest, DsarRequest};
use crate::models::status::RequestStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, requester_email, requester_name, request_type, \
                        request_message, status, response_document_ref, response_notes, \
                        submitted_at, completed_at";

/// Provides CRUD operations for DSAR requests.
pub struct DsarRequestRepo;

impl DsarRequestRepo {
    /// Insert a new request, returning the created row.
    ///
    /// The database assigns a random UUID, sets `status = 'pending'` and
    /// stamps `submitted_at`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDsarRequest,
    ) -> Result<DsarRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO dsar_requests
                 (company_id, requester_email, requester_name, request_type, request_message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(input.company_id)
            .bind(&input.requester_email)
            .bind(&input.requester_name)
            .bind(input.request_type)
            .bind(&input.request_message)
            .fetch_one(pool)
            .await
    }

    /// Fetch a request by id with no tenant check.
    ///
    /// Only for the public confirmation page, where possession of the
    /// unguessable id is the authorization.
    pub async fn find_by_id(
        pool: &PgPool,
        id: RequestId,
    ) -> Result<Option<DsarRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dsar_requests WHERE id = $1");
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a request by id within a company scope.
    pub async fn find_for_company(
        pool: &PgPool,
        id: RequestId,
        company_id: DbId,
    ) -> Result<Option<DsarRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dsar_requests WHERE id = $1 AND company_id = $2");
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's requests, newest submissions first, optionally
    /// filtered by status.
    pub async fn list_for_company(
        pool: &PgPool,
        company_id: DbId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<DsarRequest>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM dsar_requests
                     WHERE company_id = $1 AND status = $2
                     ORDER BY submitted_at DESC"
                );
                sqlx::query_as::<_, DsarRequest>(&query)
                    .bind(company_id)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM dsar_requests
                     WHERE company_id = $1
                     ORDER BY submitted_at DESC"
                );
                sqlx::query_as::<_, DsarRequest>(&query)
                    .bind(company_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Persist a status change in one atomic write.
    ///
    /// Entering `completed` stamps `completed_at` only if it is still NULL,
    /// so the timestamp survives both repeated completions and concurrent
    /// edits. Returns `None` when no row matches the id under this company.
    pub async fn update_status(
        pool: &PgPool,
        id: RequestId,
        company_id: DbId,
        status: RequestStatus,
    ) -> Result<Option<DsarRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE dsar_requests
             SET status = $3,
                 completed_at = CASE
                     WHEN $3 = 'completed' THEN COALESCE(completed_at, NOW())
                     ELSE completed_at
                 END
             WHERE id = $1 AND company_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .bind(company_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Persist a generated document reference and advance the status to
    /// `in_progress` unless the request is already terminal. Both fields
    /// change in the same statement.
    pub async fn record_document(
        pool: &PgPool,
        id: RequestId,
        company_id: DbId,
        document_ref: &str,
    ) -> Result<Option<DsarRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE dsar_requests
             SET response_document_ref = $3,
                 status = CASE
                     WHEN status IN ('completed', 'rejected') THEN status
                     ELSE 'in_progress'
                 END
             WHERE id = $1 AND company_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .bind(company_id)
            .bind(document_ref)
            .fetch_optional(pool)
            .await
    }

    /// Set or replace the admin's response notes.
    pub async fn update_notes(
        pool: &PgPool,
        id: RequestId,
        company_id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<DsarRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE dsar_requests
             SET response_notes = $3
             WHERE id = $1 AND company_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .bind(company_id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }
}
