//! First-run seed bootstrap.
//!
//! The prototype assumes a single company with one admin operator. When the
//! store is empty this creates both, plus two sample requests so the
//! dashboard isn't blank on first login. Password hashing happens in the
//! caller; this module only persists the finished hash.

use sqlx::PgPool;

use crate::models::admin_user::CreateAdminUser;
use crate::models::company::CreateCompany;
use crate::repositories::{AdminUserRepo, CompanyRepo};

/// Seed inputs, resolved from configuration by the caller.
#[derive(Debug)]
pub struct SeedConfig {
    pub company_name: String,
    pub company_contact_email: String,
    pub admin_email: String,
    /// Argon2id PHC string for the admin's initial password.
    pub admin_password_hash: String,
}

/// Seed the demo company, admin user, and sample requests.
///
/// Returns `false` without touching anything if a company already exists.
pub async fn run(pool: &PgPool, config: &SeedConfig) -> Result<bool, sqlx::Error> {
    if CompanyRepo::find_first(pool).await?.is_some() {
        return Ok(false);
    }

    let company = CompanyRepo::create(
        pool,
        &CreateCompany {
            name: config.company_name.clone(),
            contact_email: config.company_contact_email.clone(),
        },
    )
    .await?;

    AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: config.admin_email.clone(),
            password_hash: config.admin_password_hash.clone(),
            company_id: company.id,
        },
    )
    .await?;

    // Sample requests with back-dated submission times for the demo dashboard.
    sqlx::query(
        "INSERT INTO dsar_requests
             (company_id, requester_email, requester_name, request_type,
              request_message, status, submitted_at)
         VALUES
             ($1, 'john.doe@example.com', 'John Doe', 'access',
              'I would like to access all my personal data you have stored.',
              'pending', NOW() - INTERVAL '2 days'),
             ($1, 'jane.smith@example.com', 'Jane Smith', 'delete',
              'Please delete all my personal information from your systems.',
              'in_progress', NOW() - INTERVAL '5 days')",
    )
    .bind(company.id)
    .execute(pool)
    .await?;

    tracing::info!(company = %company.name, admin = %config.admin_email, "Seeded initial data");
    Ok(true)
}
