//! Repository for the `companies` table.

use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, contact_email, created_at";

/// Provides operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the created row. Seed-only.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, contact_email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// Resolve the single configured company.
    ///
    /// The prototype assumes at most one company exists; the oldest row wins
    /// if there are somehow several.
    pub async fn find_first(pool: &PgPool) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Company>(&query)
            .fetch_optional(pool)
            .await
    }
}
