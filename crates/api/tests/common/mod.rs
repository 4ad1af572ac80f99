//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use dsar_api::config::ServerConfig;
use dsar_api::routes;
use dsar_api::state::AppState;
use dsar_core::document::{DocumentError, DocumentGenerator, DocumentSpec};
use dsar_notify::{NoopNotifier, RequestNotifier};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_ttl_mins: 120,
        document_dir: "documents".to_string(),
    }
}

/// Document generator that always succeeds without touching the filesystem.
pub struct StubDocuments;

#[async_trait]
impl DocumentGenerator for StubDocuments {
    async fn generate(&self, spec: &DocumentSpec) -> Result<String, DocumentError> {
        Ok(format!("/documents/dsar_response_{}.txt", spec.request_id))
    }
}

/// Document generator that always fails, for collaborator-fault tests.
pub struct FailingDocuments;

#[async_trait]
impl DocumentGenerator for FailingDocuments {
    async fn generate(&self, _spec: &DocumentSpec) -> Result<String, DocumentError> {
        Err(DocumentError::Storage("renderer offline".to_string()))
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a stub document generator.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_documents(pool, Arc::new(StubDocuments))
}

/// Build the application router with an injected document generator.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_documents(
    pool: PgPool,
    documents: Arc<dyn DocumentGenerator>,
) -> Router {
    let notifier: Arc<dyn RequestNotifier> = Arc::new(NoopNotifier);

    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        documents,
        notifier,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
