//! Repository for the `admin_users` table.

use sqlx::PgPool;

use crate::models::admin_user::{AdminUser, CreateAdminUser};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, company_id, created_at";

/// Provides operations for admin users.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Insert a new admin user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_admin_users_email` if the email
    /// is already taken.
    pub async fn create(pool: &PgPool, input: &CreateAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (email, password_hash, company_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.company_id)
            .fetch_one(pool)
            .await
    }

    /// Find an admin user by email (case-sensitive exact match as stored).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE email = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
