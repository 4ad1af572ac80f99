//! Admin session model and DTOs.

use dsar_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `admin_sessions` table.
///
/// `admin_email` and `company_id` are copied from the admin user at login
/// time; admin operations read their tenant scope from here, not from a
/// fresh user lookup.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub admin_user_id: DbId,
    pub admin_email: String,
    pub company_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new admin session.
pub struct CreateAdminSession {
    pub admin_user_id: DbId,
    pub admin_email: String,
    pub company_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
