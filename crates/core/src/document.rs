//! Document-generation collaborator interface.
//!
//! The core never learns the document's internal format. A generator is
//! handed the request's data and returns an opaque reference (path or URL)
//! that gets persisted on the request row.

use async_trait::async_trait;

use crate::types::{RequestId, Timestamp};

/// Error type for document generation failures.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document body could not be rendered.
    #[error("Document rendering failed: {0}")]
    Render(String),

    /// The rendered document could not be stored.
    #[error("Document storage failed: {0}")]
    Storage(String),
}

/// Everything a generator needs to produce a response document.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    pub request_id: RequestId,
    /// Wire form of the request type (`"access"`, `"delete"`, `"rectify"`).
    pub request_type: String,
    pub requester_name: String,
    pub requester_email: String,
    pub generated_at: Timestamp,
}

/// External document generator (PDF engine, letter renderer, ...).
///
/// Implementations must bound their own I/O with a timeout and surface
/// failures as [`DocumentError`] rather than panicking.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Produce a response document and return its opaque reference.
    async fn generate(&self, spec: &DocumentSpec) -> Result<String, DocumentError>;
}
