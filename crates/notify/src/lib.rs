//! Outbound notifications for DSAR intake.
//!
//! Both notifications are best-effort: callers log failures and move on,
//! a submission never fails because an email did. [`EmailNotifier`] sends
//! over SMTP; [`NoopNotifier`] stands in when SMTP is not configured.

pub mod email;

pub use email::{EmailConfig, EmailNotifier};

use async_trait::async_trait;
use dsar_core::types::RequestId;

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Notification collaborator invoked after a request is durably persisted.
#[async_trait]
pub trait RequestNotifier: Send + Sync {
    /// Confirm receipt to the data subject.
    async fn notify_requester(
        &self,
        email: &str,
        name: &str,
        request_id: RequestId,
    ) -> Result<(), NotifyError>;

    /// Alert the company's admin inbox about a new request.
    async fn notify_admin(
        &self,
        request_id: RequestId,
        requester_email: &str,
    ) -> Result<(), NotifyError>;
}

/// No-op notifier used when SMTP is not configured.
pub struct NoopNotifier;

#[async_trait]
impl RequestNotifier for NoopNotifier {
    async fn notify_requester(
        &self,
        email: &str,
        _name: &str,
        request_id: RequestId,
    ) -> Result<(), NotifyError> {
        tracing::debug!(to = email, request_id = %request_id, "SMTP not configured, skipping requester confirmation");
        Ok(())
    }

    async fn notify_admin(
        &self,
        request_id: RequestId,
        requester_email: &str,
    ) -> Result<(), NotifyError> {
        tracing::debug!(requester = requester_email, request_id = %request_id, "SMTP not configured, skipping admin alert");
        Ok(())
    }
}
