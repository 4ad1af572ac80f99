//! HTTP-level integration tests for the admin session gate.
//!
//! Covers login, credential-failure indistinguishability, logout
//! idempotence, and the unauthenticated rejection on admin routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, post_json};
use sqlx::PgPool;

use dsar_api::auth::password::hash_password;
use dsar_db::models::admin_user::CreateAdminUser;
use dsar_db::models::company::CreateCompany;
use dsar_db::repositories::{AdminUserRepo, CompanyRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TEST_PASSWORD: &str = "test_password_123!";

/// Create a company plus one admin user and return the company id.
async fn seed_admin(pool: &PgPool, email: &str) -> i64 {
    let company = CompanyRepo::create(
        pool,
        &CreateCompany {
            name: "Demo Company Ltd.".to_string(),
            contact_email: "contact@democompany.com".to_string(),
        },
    )
    .await
    .expect("company creation should succeed");

    AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            company_id: company.id,
        },
    )
    .await
    .expect("admin creation should succeed");

    company.id
}

/// Log in via the API and return the session token.
async fn login(app: axum::Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns a token and the admin's bound company scope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let company_id = seed_admin(&pool, "admin@democompany.com").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "admin@democompany.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert!(json["expires_in"].is_number());
    assert_eq!(json["admin"]["email"], "admin@democompany.com");
    assert_eq!(json["admin"]["company_id"], company_id);
}

/// Every login mints a fresh session token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_issues_fresh_token_each_time(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;

    let first = login(
        common::build_test_app(pool.clone()),
        "admin@democompany.com",
        TEST_PASSWORD,
    )
    .await;
    let second = login(
        common::build_test_app(pool),
        "admin@democompany.com",
        TEST_PASSWORD,
    )
    .await;
    assert_ne!(first, second);
}

/// Wrong password and unknown email must be indistinguishable: same
/// status, same code, same message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_credential_failures_are_indistinguishable(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "admin@democompany.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(response).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "nobody@democompany.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(response).await;

    assert_eq!(
        wrong_password, unknown_email,
        "error bodies must not reveal whether the account exists"
    );
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

/// Admin routes without a session are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_route_requires_session(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/requests").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHENTICATED");
}

/// A made-up token is rejected just like a missing one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token_is_rejected(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/requests", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid session grants access to admin routes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_valid_session_grants_access(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;
    let token = login(
        common::build_test_app(pool.clone()),
        "admin@democompany.com",
        TEST_PASSWORD,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/requests", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout ends the session and is idempotent.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_ends_session_idempotently(pool: PgPool) {
    seed_admin(&pool, "admin@democompany.com").await;
    let token = login(
        common::build_test_app(pool.clone()),
        "admin@democompany.com",
        TEST_PASSWORD,
    )
    .await;

    let response = post_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token no longer opens the gate.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/requests",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Logging out again with the dead token is still a quiet 204.
    let response = post_auth(
        common::build_test_app(pool),
        "/api/v1/auth/logout",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
