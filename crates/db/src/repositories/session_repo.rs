//! Repository for the `admin_sessions` table.

use sqlx::PgPool;

use crate::models::session::{AdminSession, CreateAdminSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, admin_user_id, admin_email, company_id, token_hash, expires_at, created_at";

/// Provides CRUD operations for admin sessions.
pub struct AdminSessionRepo;

impl AdminSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdminSession,
    ) -> Result<AdminSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions
                 (admin_user_id, admin_email, company_id, token_hash, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(input.admin_user_id)
            .bind(&input.admin_email)
            .bind(input.company_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by token hash and slide its expiry forward
    /// by `ttl_mins` in the same statement.
    ///
    /// Returns `None` for unknown or expired tokens.
    pub async fn find_active_and_touch(
        pool: &PgPool,
        token_hash: &str,
        ttl_mins: i32,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "UPDATE admin_sessions
             SET expires_at = NOW() + make_interval(mins => $2)
             WHERE token_hash = $1 AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(token_hash)
            .bind(ttl_mins)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with the given token hash. Returns `true` if a
    /// row was removed; deleting an absent session is not an error.
    pub async fn delete_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
