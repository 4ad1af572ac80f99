//! Integration tests for the DSAR request repository layer.
//!
//! Exercises tenant scoping, the status transition writes, and the
//! `completed_at` set-exactly-once guarantee against a real database.

use sqlx::PgPool;

use dsar_db::models::company::CreateCompany;
use dsar_db::models::dsar_request::CreateDsarRequest;
use dsar_db::models::status::{RequestStatus, RequestType};
use dsar_db::repositories::{CompanyRepo, DsarRequestRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_company(pool: &PgPool, name: &str) -> dsar_db::models::company::Company {
    CompanyRepo::create(
        pool,
        &CreateCompany {
            name: name.to_string(),
            contact_email: format!("contact@{name}.test"),
        },
    )
    .await
    .expect("company creation should succeed")
}

async fn create_request(
    pool: &PgPool,
    company_id: i64,
    email: &str,
) -> dsar_db::models::dsar_request::DsarRequest {
    DsarRequestRepo::create(
        pool,
        &CreateDsarRequest {
            company_id,
            requester_email: email.to_string(),
            requester_name: "Test Subject".to_string(),
            request_type: RequestType::Access,
            request_message: None,
        },
    )
    .await
    .expect("request creation should succeed")
}

// ---------------------------------------------------------------------------
// Creation defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn created_request_starts_pending_with_no_completion(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let before = chrono::Utc::now();
    let request = create_request(&pool, company.id, "a@b.com").await;
    let after = chrono::Utc::now();

    assert_eq!(request.status, RequestStatus::Pending);
    assert!(request.completed_at.is_none());
    assert!(request.submitted_at >= before && request.submitted_at <= after);
    assert!(request.response_document_ref.is_none());
}

// ---------------------------------------------------------------------------
// Tenant scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn foreign_company_request_is_invisible(pool: PgPool) {
    let acme = create_company(&pool, "acme").await;
    let globex = create_company(&pool, "globex").await;
    let request = create_request(&pool, acme.id, "a@b.com").await;

    let found = DsarRequestRepo::find_for_company(&pool, request.id, globex.id)
        .await
        .expect("query should succeed");
    assert!(found.is_none(), "foreign-company lookup must miss");

    let updated =
        DsarRequestRepo::update_status(&pool, request.id, globex.id, RequestStatus::Rejected)
            .await
            .expect("query should succeed");
    assert!(updated.is_none(), "foreign-company update must miss");

    // The row itself is untouched.
    let row = DsarRequestRepo::find_for_company(&pool, request.id, acme.id)
        .await
        .expect("query should succeed")
        .expect("owner lookup should hit");
    assert_eq!(row.status, RequestStatus::Pending);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_is_scoped_and_newest_first(pool: PgPool) {
    let acme = create_company(&pool, "acme").await;
    let globex = create_company(&pool, "globex").await;
    let first = create_request(&pool, acme.id, "first@acme.test").await;
    let second = create_request(&pool, acme.id, "second@acme.test").await;
    create_request(&pool, globex.id, "other@globex.test").await;

    let listed = DsarRequestRepo::list_for_company(&pool, acme.id, None)
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id, "newest submission first");
    assert_eq!(listed[1].id, first.id);

    DsarRequestRepo::update_status(&pool, first.id, acme.id, RequestStatus::InProgress)
        .await
        .expect("update should succeed");

    let in_progress =
        DsarRequestRepo::list_for_company(&pool, acme.id, Some(RequestStatus::InProgress))
            .await
            .expect("list should succeed");
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, first.id);
}

// ---------------------------------------------------------------------------
// Completion timestamp semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn completed_at_is_set_exactly_once(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let request = create_request(&pool, company.id, "a@b.com").await;

    let completed =
        DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::Completed)
            .await
            .expect("update should succeed")
            .expect("row should match");
    let stamp = completed.completed_at.expect("completion must be stamped");

    // Writing 'completed' again must leave the original stamp alone.
    let again =
        DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::Completed)
            .await
            .expect("update should succeed")
            .expect("row should match");
    assert_eq!(again.completed_at, Some(stamp));
}

#[sqlx::test(migrations = "./migrations")]
async fn non_completing_updates_do_not_touch_completed_at(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let request = create_request(&pool, company.id, "a@b.com").await;

    let moved =
        DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::InProgress)
            .await
            .expect("update should succeed")
            .expect("row should match");
    assert_eq!(moved.status, RequestStatus::InProgress);
    assert!(moved.completed_at.is_none());
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_status_updates_resolve_to_one_submitted_value(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let request = create_request(&pool, company.id, "a@b.com").await;

    let (a, b) = tokio::join!(
        DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::InProgress),
        DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::Rejected),
    );
    a.expect("first update should succeed");
    b.expect("second update should succeed");

    let row = DsarRequestRepo::find_for_company(&pool, request.id, company.id)
        .await
        .expect("query should succeed")
        .expect("row should exist");
    assert!(
        row.status == RequestStatus::InProgress || row.status == RequestStatus::Rejected,
        "final status must be exactly one of the submitted values, got {:?}",
        row.status
    );
}

// ---------------------------------------------------------------------------
// Document reference
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn recording_a_document_advances_pending_to_in_progress(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let request = create_request(&pool, company.id, "a@b.com").await;

    let updated = DsarRequestRepo::record_document(
        &pool,
        request.id,
        company.id,
        "/documents/response.pdf",
    )
    .await
    .expect("update should succeed")
    .expect("row should match");

    assert_eq!(updated.status, RequestStatus::InProgress);
    assert_eq!(
        updated.response_document_ref.as_deref(),
        Some("/documents/response.pdf")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn recording_a_document_leaves_terminal_status_alone(pool: PgPool) {
    let company = create_company(&pool, "acme").await;
    let request = create_request(&pool, company.id, "a@b.com").await;
    DsarRequestRepo::update_status(&pool, request.id, company.id, RequestStatus::Completed)
        .await
        .expect("update should succeed");

    let updated = DsarRequestRepo::record_document(
        &pool,
        request.id,
        company.id,
        "/documents/late.pdf",
    )
    .await
    .expect("update should succeed")
    .expect("row should match");

    assert_eq!(updated.status, RequestStatus::Completed);
    assert_eq!(
        updated.response_document_ref.as_deref(),
        Some("/documents/late.pdf")
    );
}
