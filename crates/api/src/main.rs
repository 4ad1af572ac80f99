use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dsar_api::auth::password::hash_password;
use dsar_api::config::ServerConfig;
use dsar_api::docgen::LetterGenerator;
use dsar_api::routes;
use dsar_api::state::AppState;
use dsar_notify::{EmailConfig, EmailNotifier, NoopNotifier, RequestNotifier};

/// How often the expired-session sweep runs.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dsar_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = dsar_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    dsar_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    dsar_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Seed bootstrap (first run only) ---
    let seed_config = seed_config_from_env();
    let seeded = dsar_db::seed::run(&pool, &seed_config)
        .await
        .expect("Failed to seed initial data");
    if seeded {
        tracing::info!("Initial company and admin user created");
    }

    // --- Collaborators ---
    let documents = Arc::new(LetterGenerator::new(config.document_dir.clone()));

    let notifier: Arc<dyn RequestNotifier> = match EmailConfig::from_env() {
        Some(email_config) => {
            tracing::info!(host = %email_config.smtp_host, "SMTP notifications enabled");
            Arc::new(EmailNotifier::new(email_config))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, notification emails disabled");
            Arc::new(NoopNotifier)
        }
    };

    // --- CORS ---
    let cors = build_cors_layer(&config);

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        documents,
        notifier,
    };

    // --- Expired-session sweep ---
    let cleanup_pool = pool.clone();
    let cleanup_handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match dsar_db::repositories::AdminSessionRepo::cleanup_expired(&cleanup_pool).await {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, "Removed expired admin sessions"),
                Err(e) => tracing::warn!(error = %e, "Session cleanup failed"),
            }
        }
    });

    // --- Request ID header name ---
    let request_id_header = HeaderName::from_static("x-request-id");

    // --- Router ---
    let app = Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        // API v1 routes.
        .nest("/api/v1", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500 JSON.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    cleanup_handle.abort();
    tracing::info!("Graceful shutdown complete");
}

/// Build seed settings from environment variables, hashing the initial
/// admin password up front.
///
/// | Env Var            | Default                    |
/// |--------------------|----------------------------|
/// | `COMPANY_NAME`     | `Demo Company Ltd.`        |
/// | `COMPANY_EMAIL`    | `contact@democompany.com`  |
/// | `SEED_ADMIN_EMAIL` | `admin@democompany.com`    |
/// | `SEED_ADMIN_PASSWORD` | `Admin123!`             |
fn seed_config_from_env() -> dsar_db::seed::SeedConfig {
    let admin_password =
        std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "Admin123!".into());

    dsar_db::seed::SeedConfig {
        company_name: std::env::var("COMPANY_NAME").unwrap_or_else(|_| "Demo Company Ltd.".into()),
        company_contact_email: std::env::var("COMPANY_EMAIL")
            .unwrap_or_else(|_| "contact@democompany.com".into()),
        admin_email: std::env::var("SEED_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@democompany.com".into()),
        admin_password_hash: hash_password(&admin_password)
            .expect("Failed to hash seed admin password"),
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid, which is the
/// desired behaviour -- we want misconfiguration to fail fast.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
