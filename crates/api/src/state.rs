use std::sync::Arc;

use dsar_core::document::DocumentGenerator;
use dsar_notify::RequestNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dsar_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Document generation collaborator.
    pub documents: Arc<dyn DocumentGenerator>,
    /// Intake notification collaborator.
    pub notifier: Arc<dyn RequestNotifier>,
}
