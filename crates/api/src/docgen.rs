//! File-backed response document generator.
//!
//! Renders a plain-text DSAR response letter into the configured output
//! directory and returns a `/documents/<file>` reference. The write is
//! bounded by a timeout so a hung filesystem surfaces as a collaborator
//! failure instead of stalling the request.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use dsar_core::document::{DocumentError, DocumentGenerator, DocumentSpec};

/// Upper bound on a single document write.
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Writes response letters to a local directory.
pub struct LetterGenerator {
    output_dir: PathBuf,
}

impl LetterGenerator {
    /// Create a generator writing into `output_dir`. The directory is
    /// created on first use.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentGenerator for LetterGenerator {
    async fn generate(&self, spec: &DocumentSpec) -> Result<String, DocumentError> {
        let file_name = format!(
            "dsar_response_{}_{}.txt",
            spec.request_id,
            spec.generated_at.format("%Y%m%d")
        );
        let path = self.output_dir.join(&file_name);
        let body = render_letter(spec);

        let write = async {
            tokio::fs::create_dir_all(&self.output_dir).await?;
            tokio::fs::write(&path, body).await
        };
        tokio::time::timeout(WRITE_TIMEOUT, write)
            .await
            .map_err(|_| DocumentError::Storage("document write timed out".to_string()))?
            .map_err(|e| DocumentError::Storage(e.to_string()))?;

        tracing::info!(file = %file_name, request_id = %spec.request_id, "Response document generated");
        Ok(format!("/documents/{file_name}"))
    }
}

/// Render the response letter body for a request.
fn render_letter(spec: &DocumentSpec) -> String {
    let date = spec.generated_at.format("%d %B %Y");
    format!(
        "GDPR DATA SUBJECT ACCESS REQUEST RESPONSE\n\
         =========================================\n\n\
         Request ID: {id}\n\
         Date: {date}\n\
         Request Type: {request_type}\n\n\
         Requester Information\n\
         ---------------------\n\
         Name: {name}\n\
         Email: {email}\n\n\
         Personal Data We Hold\n\
         ---------------------\n\
         Based on your request, we have identified the following personal data:\n\n\
         Email:           {email}\n\
         Name:            {name}\n\n\
         Your Rights\n\
         -----------\n\
         Under GDPR, you have the following rights:\n\
         - Right to access your data\n\
         - Right to rectification\n\
         - Right to erasure\n\
         - Right to data portability\n\n\
         Generated on {generated_at}\n",
        id = spec.request_id,
        date = date,
        request_type = spec.request_type,
        name = spec.requester_name,
        email = spec.requester_email,
        generated_at = spec.generated_at.format("%d %B %Y %H:%M"),
    )
}
