//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every DSAR-request method
//! that serves an admin operation takes the session's `company_id` and
//! folds it into the row predicate, so a foreign-company id behaves
//! exactly like a nonexistent one.

pub mod admin_user_repo;
pub mod company_repo;
pub mod dsar_request_repo;
pub mod session_repo;

pub use admin_user_repo::AdminUserRepo;
pub use company_repo::CompanyRepo;
pub use dsar_request_repo::DsarRequestRepo;
pub use session_repo::AdminSessionRepo;
