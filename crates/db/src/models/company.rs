//! Company entity model.

use dsar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `companies` table. Created only by the seed bootstrap and
/// immutable afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub contact_email: String,
    pub created_at: Timestamp,
}

/// DTO for inserting the seed company.
#[derive(Debug)]
pub struct CreateCompany {
    pub name: String,
    pub contact_email: String,
}
