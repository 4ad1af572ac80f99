//! Email notification delivery via SMTP.
//!
//! [`EmailNotifier`] wraps the `lettre` async SMTP transport to send the
//! two intake emails: a confirmation to the data subject and an alert to
//! the company's admin inbox. Configuration is loaded from environment
//! variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns
//! `None` and the caller should fall back to the no-op notifier.

use async_trait::async_trait;
use dsar_core::types::RequestId;

use crate::{NotifyError, RequestNotifier};

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@gdprdsar.com";

/// Default admin alert recipient when `ADMIN_EMAIL` is not set.
const DEFAULT_ADMIN_ADDRESS: &str = "admin@democompany.com";

/// Configuration for the SMTP notification service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Recipient of new-request alerts.
    pub admin_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | yes      | --                       |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_FROM`     | no       | `noreply@gdprdsar.com`   |
    /// | `ADMIN_EMAIL`   | no       | `admin@democompany.com`  |
    /// | `SMTP_USER`     | no       | --                       |
    /// | `SMTP_PASSWORD` | no       | --                       |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            admin_address: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends intake notification emails via SMTP.
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    /// Create a new email notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a plain-text email to the given address.
    async fn send(&self, to_email: &str, subject: &str, body: String) -> Result<(), NotifyError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, subject, "Notification email sent");
        Ok(())
    }
}

#[async_trait]
impl RequestNotifier for EmailNotifier {
    async fn notify_requester(
        &self,
        email: &str,
        name: &str,
        request_id: RequestId,
    ) -> Result<(), NotifyError> {
        let body = format!(
            "Dear {name},\n\n\
             We have received your GDPR data request. Your request ID is: {request_id}\n\n\
             We will process your request within 30 days as required by GDPR regulations.\n\
             You will receive another email once your request has been processed.\n\n\
             Best regards,\n\
             Compliance Team\n"
        );
        self.send(email, "GDPR Data Request Received", body).await
    }

    async fn notify_admin(
        &self,
        request_id: RequestId,
        requester_email: &str,
    ) -> Result<(), NotifyError> {
        let body = format!(
            "A new GDPR request has been submitted:\n\n\
             Request ID: {request_id}\n\
             Requester Email: {requester_email}\n\n\
             Please log in to the admin panel to review and process this request.\n"
        );
        self.send(&self.config.admin_address, "New GDPR Data Request", body)
            .await
    }
}
