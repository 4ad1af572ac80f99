//! Admin user entity model.

use dsar_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `admin_users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub company_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for provisioning an admin user (seed / ops tooling).
#[derive(Debug)]
pub struct CreateAdminUser {
    pub email: String,
    /// Argon2id PHC string, hashed by the caller.
    pub password_hash: String,
    pub company_id: DbId,
}
